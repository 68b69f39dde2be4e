//! Staff commands.

use clap::Subcommand;
use fleetdesk_admin::api::{ApiError, FleetClient};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{Department, StaffId, StaffStatus};

use super::{parse_department, parse_staff_status};

#[derive(Subcommand)]
pub enum StaffCommand {
    /// List one server-side page of staff
    List {
        /// Restrict to one status (active, suspended, terminated, inactive)
        #[arg(long, value_parser = parse_staff_status)]
        status: Option<StaffStatus>,
        /// Restrict to one department
        #[arg(long, value_parser = parse_department)]
        department: Option<Department>,
        /// Free-text search over name, email, phone
        #[arg(long)]
        search: Option<String>,
        /// Page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one staff member
    Get {
        /// Staff ID
        id: i64,
    },
    /// Suspend an active staff member
    Suspend {
        /// Staff ID
        id: i64,
    },
    /// Terminate a staff member (no way back)
    Terminate {
        /// Staff ID
        id: i64,
    },
    /// Reactivate a suspended staff member
    Reactivate {
        /// Staff ID
        id: i64,
    },
}

pub async fn run(
    store: &mut Store,
    client: &FleetClient,
    command: StaffCommand,
    json: bool,
) -> Result<(), ApiError> {
    match command {
        StaffCommand::List {
            status,
            department,
            search,
            page,
        } => {
            store.staff.filters.status = status;
            store.staff.filters.department = department;
            store.staff.search_term = search.unwrap_or_default();
            ops::fetch_staff(store, client, page).await?;

            let visible = store.staff.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible).unwrap_or_default());
                return Ok(());
            }
            println!(
                "{:<6} {:<24} {:<12} {:<16} {:<12} {:>12}",
                "ID", "NAME", "ROLE", "DEPARTMENT", "STATUS", "SALARY"
            );
            for staff in visible {
                println!(
                    "{:<6} {:<24} {:<12} {:<16} {:<12} {:>12}",
                    staff.id,
                    staff.full_name,
                    staff.role.to_string(),
                    format!("{:?}", staff.department).to_lowercase(),
                    format!("{:?}", staff.status).to_lowercase(),
                    staff.salary.to_string(),
                );
            }
            let pagination = store.staff.pagination;
            if pagination.total_pages > 0 {
                println!(
                    "page {}/{} ({} staff)",
                    pagination.current_page, pagination.total_pages, pagination.total_items
                );
            }
        }
        StaffCommand::Get { id } => {
            let staff_id = StaffId::new(id);
            ops::fetch_staff_member(store, client, staff_id).await?;
            ops::fetch_salary_payments(store, client, staff_id).await?;
            if let Some(staff) = &store.staff.selected {
                if json {
                    println!("{}", serde_json::to_string_pretty(staff).unwrap_or_default());
                } else {
                    println!("{} {} ({})", staff.id, staff.full_name, staff.role);
                    println!("  status:   {:?}", staff.status);
                    println!("  salary:   {}", staff.salary);
                    println!("  hired on: {}", staff.hired_on);
                    println!("  salary payments: {}", staff.salary_payments.len());
                }
            }
        }
        StaffCommand::Suspend { id } => {
            ops::suspend_staff(store, client, StaffId::new(id)).await?;
            println!("staff {id} suspended");
        }
        StaffCommand::Terminate { id } => {
            ops::terminate_staff(store, client, StaffId::new(id)).await?;
            println!("staff {id} terminated");
        }
        StaffCommand::Reactivate { id } => {
            ops::reactivate_staff(store, client, StaffId::new(id)).await?;
            println!("staff {id} reactivated");
        }
    }
    Ok(())
}
