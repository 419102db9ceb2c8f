//! Plain-text rendering for the command line.

use roster_app::Notice;
use roster_core::dates::{days_until, format_date, parse_date};
use roster_core::employee::non_empty;
use roster_core::form::{format_hobbies, format_other_documents};
use roster_core::stats::{initials, is_contract_ending_soon, is_new_hire};
use roster_core::{DashboardStats, Employee, StatWindows};
use time::OffsetDateTime;

pub fn render_stats(stats: &DashboardStats, windows: StatWindows) {
    println!("Total employees: {}", stats.total);
    println!("Active divisions: {}", stats.active_divisions);
    println!(
        "Contracts ending within {} days: {}",
        windows.contract_warning_days, stats.contracts_ending_soon
    );
    println!(
        "New hires in the last {} days: {}",
        windows.new_hire_days, stats.new_hires
    );
}

pub fn render_employee_table(employees: &[&Employee], now: OffsetDateTime, windows: StatWindows) {
    println!("ID | Name | NIK | Division | Position | Status | Hired | Contract end");
    println!("-- | ---- | --- | -------- | -------- | ------ | ----- | ------------");

    for employee in employees {
        let mut hired = format_date(&employee.hire_date);
        if is_new_hire(employee, now, windows.new_hire_days) {
            hired.push_str(" (new)");
        }
        println!(
            "{} | {} | {} | {} | {} | {} | {} | {}",
            employee.id,
            employee.name,
            or_dash(&employee.nik),
            or_dash(&employee.division),
            or_dash(&employee.position),
            or_dash(&employee.status),
            hired,
            contract_label(employee, now, windows),
        );
    }
}

fn contract_label(employee: &Employee, now: OffsetDateTime, windows: StatWindows) -> String {
    let formatted = format_date(&employee.contract_end);
    if !is_contract_ending_soon(employee, now, windows.contract_warning_days) {
        return formatted;
    }
    parse_date(&employee.contract_end).map_or_else(
        || formatted.clone(),
        |end| format!("{formatted} (ends in {} days)", days_until(end, now)),
    )
}

pub fn render_employee_detail(employee: &Employee) {
    println!("[{}] {}", initials(&employee.name), employee.name);
    println!("{} · {}", or_dash(&employee.position), or_dash(&employee.division));
    println!();

    field("ID", employee.id.as_str());
    field("NIK", &employee.nik);
    field("Status", &employee.status);
    field("Email", &employee.email);
    field("Phone", &employee.phone);
    field("Gender", &employee.gender);
    field("Address", &employee.address);
    field("Date of birth", &format_date(&employee.dob));
    field("Hire date", &format_date(&employee.hire_date));
    field("Contract end", &format_date(&employee.contract_end));
    field("Photo", photo_label(&employee.photo));
    field("Hobbies", &format_hobbies(&employee.hobbies));

    println!();
    println!("Socials");
    field("  LinkedIn", &employee.socials.linkedin);
    field("  Instagram", &employee.socials.instagram);
    field("  X", &employee.socials.x);
    field("  Facebook", &employee.socials.facebook);

    println!();
    println!("Emergency contact");
    if employee.emergency.is_empty() {
        println!("  -");
    } else {
        field("  Name", &employee.emergency.name);
        field("  Relation", &employee.emergency.relation);
        field("  Phone", &employee.emergency.phone);
    }

    println!();
    println!("Documents");
    field("  CV", &employee.documents.cv);
    field("  Contract", &employee.documents.contract);
    field("  Letter", &employee.documents.letter);
    field("  Others", &format_other_documents(&employee.documents.others));
}

pub fn render_empty_detail() {
    println!("No employee selected. Pick one from `roster ls` and pass its id to `roster show --id`.");
}

pub fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("error: {notice}");
    } else {
        eprintln!("{notice}");
    }
}

fn field(label: &str, value: &str) {
    println!("{label}: {}", or_dash(value));
}

fn or_dash(value: &str) -> &str {
    non_empty(value).unwrap_or("-")
}

fn photo_label(photo: &str) -> &str {
    if photo.starts_with("data:") {
        "(embedded image)"
    } else {
        photo
    }
}
