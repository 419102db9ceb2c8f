use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use roster_app::{EXPORT_FILE_NAME, EmployeeStore, PhotoSource, RosterError, Session};
use roster_core::{EmployeeDraft, EmployeeId, FieldInput};
use time::OffsetDateTime;

use crate::view;
use crate::{Command, LsFormat};

/// Editable employee fields shared by `add` and `edit`.
///
/// Every flag is optional so `edit` can patch a single field; `add` starts from
/// a blank form, where validation reports the first missing required field.
#[derive(Args, Debug, Default, Clone)]
pub struct EmployeeFields {
    #[arg(long)]
    pub nik: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub division: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    /// Employment status such as Tetap, Kontrak or Magang.
    #[arg(long)]
    pub status: Option<String>,
    /// Work email; `--email` is taken by the login flag.
    #[arg(id = "employee_email", long = "employee-email")]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[arg(long)]
    pub dob: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    /// Hire date, `YYYY-MM-DD`.
    #[arg(long)]
    pub hire_date: Option<String>,
    /// Contract end date, `YYYY-MM-DD`.
    #[arg(long)]
    pub contract_end: Option<String>,
    /// Comma-separated hobbies.
    #[arg(long)]
    pub hobbies: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub x: Option<String>,
    #[arg(long)]
    pub facebook: Option<String>,
    #[arg(long)]
    pub emergency_name: Option<String>,
    #[arg(long)]
    pub emergency_relation: Option<String>,
    #[arg(long)]
    pub emergency_phone: Option<String>,
    /// CV link.
    #[arg(long)]
    pub cv: Option<String>,
    /// Contract document link.
    #[arg(long)]
    pub contract: Option<String>,
    /// Offer or reference letter link.
    #[arg(long)]
    pub letter: Option<String>,
    /// Extra documents as `Name|URL; Name|URL`.
    #[arg(long)]
    pub others: Option<String>,
    /// Photo URL stored as given.
    #[arg(long, conflicts_with = "photo_file")]
    pub photo_url: Option<String>,
    /// Image file embedded into the record as a data URL.
    #[arg(long)]
    pub photo_file: Option<PathBuf>,
}

impl EmployeeFields {
    /// Overlay the provided flags onto `draft`.
    fn apply(self, draft: &mut EmployeeDraft) -> Result<(), RosterError> {
        let photo = match (self.photo_url, self.photo_file) {
            (Some(url), _) => Some(PhotoSource::Url(url)),
            (None, Some(path)) => Some(PhotoSource::File(path)),
            (None, None) => None,
        };
        if let Some(source) = photo {
            draft.photo = source.resolve()?;
        }

        let scalars = [
            (self.nik, &mut draft.nik),
            (self.name, &mut draft.name),
            (self.division, &mut draft.division),
            (self.position, &mut draft.position),
            (self.status, &mut draft.status),
            (self.email, &mut draft.email),
            (self.phone, &mut draft.phone),
            (self.address, &mut draft.address),
            (self.dob, &mut draft.dob),
            (self.gender, &mut draft.gender),
            (self.hire_date, &mut draft.hire_date),
            (self.contract_end, &mut draft.contract_end),
            (self.linkedin, &mut draft.socials.linkedin),
            (self.instagram, &mut draft.socials.instagram),
            (self.x, &mut draft.socials.x),
            (self.facebook, &mut draft.socials.facebook),
            (self.emergency_name, &mut draft.emergency.name),
            (self.emergency_relation, &mut draft.emergency.relation),
            (self.emergency_phone, &mut draft.emergency.phone),
            (self.cv, &mut draft.cv),
            (self.contract, &mut draft.contract),
            (self.letter, &mut draft.letter),
        ];
        for (value, slot) in scalars {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(text) = self.hobbies {
            draft.hobbies = FieldInput::RawText(text);
        }
        if let Some(text) = self.others {
            draft.others = FieldInput::RawText(text);
        }
        Ok(())
    }
}

pub fn run<S: EmployeeStore>(
    command: Command,
    session: &mut Session<S>,
    now: OffsetDateTime,
) -> Result<()> {
    match command {
        Command::Stats => {
            view::render_stats(&session.stats(now), session.windows());
        }
        Command::Ls {
            search,
            division,
            status,
            sort,
            format,
        } => {
            session.set_search(search.unwrap_or_default());
            session.set_division_filter(&division);
            session.set_status_filter(&status);
            session.set_sort(sort);

            let filtered = session.query().is_filtered();
            let employees = session.view();
            match format {
                LsFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
                LsFormat::Table if employees.is_empty() => {
                    if filtered {
                        println!("No employees matched the provided filters");
                    } else {
                        println!("No employees found");
                    }
                }
                LsFormat::Table => view::render_employee_table(&employees, now, session.windows()),
            }
        }
        Command::Show { id } => {
            let id = EmployeeId::from_raw(id);
            session.select(id.clone());
            match session.selected() {
                Some(employee) => view::render_employee_detail(employee),
                None => {
                    view::render_empty_detail();
                    return Err(user_facing(RosterError::NotFound(id)));
                }
            }
        }
        Command::Divisions => {
            for division in session.division_options() {
                println!("{division}");
            }
        }
        Command::Add { fields } => {
            let mut draft = EmployeeDraft::default();
            fields.apply(&mut draft).map_err(user_facing)?;
            let id = session.add(draft).map_err(user_facing)?;
            println!("added employee: {id}");
        }
        Command::Edit { id, fields } => {
            let id = EmployeeId::from_raw(id);
            let mut draft = session
                .get(&id)
                .map(EmployeeDraft::from_employee)
                .ok_or_else(|| user_facing(RosterError::NotFound(id.clone())))?;
            fields.apply(&mut draft).map_err(user_facing)?;
            session.update(&id, draft).map_err(user_facing)?;
            println!("updated employee: {id}");
        }
        Command::Rm { id } => {
            let id = EmployeeId::from_raw(id);
            if !session.delete(&id) {
                return Err(user_facing(RosterError::NotFound(id)));
            }
            println!("deleted employee: {id}");
        }
        Command::Export { out: Some(path) } => {
            let path = if path.is_dir() {
                path.join(EXPORT_FILE_NAME)
            } else {
                path
            };
            let count = session.export_to_file(&path).map_err(user_facing)?;
            println!("exported {count} employees to {}", path.display());
        }
        Command::Export { out: None } => {
            println!("{}", session.export_json().map_err(user_facing)?);
        }
        Command::Import { file } => {
            let count = session.import_file(&file).map_err(user_facing)?;
            println!("imported {count} employees from {}", file.display());
        }
    }

    Ok(())
}

/// Lead with the notification text and keep the technical error as the cause.
pub fn user_facing(err: RosterError) -> anyhow::Error {
    let message = err.describe_user_facing();
    anyhow::Error::new(err).context(message)
}
