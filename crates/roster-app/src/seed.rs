//! Demo records installed on first start.

use roster_core::dates::offset_days;
use roster_core::{Documents, EmergencyContact, Employee, EmployeeId, OtherDocument, Socials};
use time::OffsetDateTime;

/// Three sample employees with hire and contract dates relative to `now`.
#[must_use]
pub fn demo_employees(now: OffsetDateTime) -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId::new(),
            nik: "EMP-001".into(),
            name: "Siti Rahma".into(),
            division: "HR".into(),
            position: "HR Generalist".into(),
            status: "Tetap".into(),
            email: "siti.rahma@contoh.co".into(),
            phone: "0812-3456-7890".into(),
            photo: "https://i.pravatar.cc/120?img=5".into(),
            address: "Jl. Melati No. 10, Jakarta".into(),
            dob: "1993-04-12".into(),
            gender: "Perempuan".into(),
            hire_date: offset_days(now, -120),
            contract_end: offset_days(now, 365 * 2),
            hobbies: vec!["Membaca".into(), "Yoga".into()],
            socials: Socials {
                linkedin: "https://linkedin.com/in/sitirahma".into(),
                ..Socials::default()
            },
            emergency: EmergencyContact {
                name: "Budi Rahman".into(),
                relation: "Suami".into(),
                phone: "0813-2222-3333".into(),
            },
            documents: Documents {
                cv: "#".into(),
                contract: "#".into(),
                letter: "#".into(),
                others: vec![OtherDocument::new("Sertifikat HRBP", "#")],
            },
        },
        Employee {
            id: EmployeeId::new(),
            nik: "EMP-002".into(),
            name: "Andi Pratama".into(),
            division: "Engineering".into(),
            position: "Backend Engineer".into(),
            status: "Kontrak".into(),
            email: "andi.pratama@contoh.co".into(),
            phone: "0821-1111-2222".into(),
            photo: "https://i.pravatar.cc/120?img=12".into(),
            address: "Bandung, Jawa Barat".into(),
            dob: "1990-10-05".into(),
            gender: "Laki-laki".into(),
            hire_date: offset_days(now, -20),
            contract_end: offset_days(now, 55),
            hobbies: vec!["Futsal".into(), "Hiking".into()],
            socials: Socials {
                x: "https://x.com/andip".into(),
                ..Socials::default()
            },
            emergency: EmergencyContact {
                name: "Rani Pratiwi".into(),
                relation: "Istri".into(),
                phone: "0852-1111-2223".into(),
            },
            documents: Documents {
                cv: "#".into(),
                contract: "#".into(),
                letter: "#".into(),
                others: Vec::new(),
            },
        },
        Employee {
            id: EmployeeId::new(),
            nik: "EMP-003".into(),
            name: "Maria Chen".into(),
            division: "Finance".into(),
            position: "Accounting Lead".into(),
            status: "Tetap".into(),
            email: "maria.chen@contoh.co".into(),
            phone: "0819-8888-7777".into(),
            photo: String::new(),
            address: "Surabaya, Jawa Timur".into(),
            dob: "1988-02-17".into(),
            gender: "Perempuan".into(),
            hire_date: offset_days(now, -400),
            contract_end: offset_days(now, 800),
            hobbies: vec!["Memasak".into()],
            socials: Socials {
                linkedin: "https://linkedin.com/in/mariachen".into(),
                ..Socials::default()
            },
            emergency: EmergencyContact {
                name: "Dion".into(),
                relation: "Suami".into(),
                phone: "0813-9999-0000".into(),
            },
            documents: Documents {
                cv: "#".into(),
                contract: "#".into(),
                letter: "#".into(),
                others: vec![OtherDocument::new("Sertifikat Brevet", "#")],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{DashboardStats, StatWindows};
    use std::collections::HashSet;

    #[test]
    fn demo_data_has_unique_ids_and_one_contract_ending_soon() {
        let now = OffsetDateTime::now_utc();
        let records = demo_employees(now);
        let ids: HashSet<_> = records.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 3);

        let stats = DashboardStats::compute(&records, now, StatWindows::default());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active_divisions, 3);
        assert_eq!(stats.contracts_ending_soon, 1);
        assert_eq!(stats.new_hires, 1);
    }
}
