//! Line-oriented front end: parses typed commands into core messages and
//! renders the view model as plain text.

use std::fmt::Write as _;

use careerflow_core::{AppViewModel, JobStatus, Msg, StatusFilter};

pub(crate) const HELP: &str = "\
Commands:
  search <text>                       filter by company or title (empty clears)
  filter <ALL|STATUS>                 filter by status
  company <text> | title <text>       edit the new-job form
  status <STATUS>                     status for the new job
  add [<company> | <title> [| <status>]]
                                      submit the form, optionally filling it first
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub(crate) fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" | "show" | "list" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "search" => Command::Dispatch(vec![Msg::QueryChanged(rest.to_string())]),
        "filter" => match rest.parse::<StatusFilter>() {
            Ok(status) => Command::Dispatch(vec![Msg::StatusFilterChanged(status)]),
            Err(err) => Command::Invalid(err.to_string()),
        },
        "company" => Command::Dispatch(vec![Msg::CompanyChanged(rest.to_string())]),
        "title" => Command::Dispatch(vec![Msg::TitleChanged(rest.to_string())]),
        "status" => match rest.parse::<JobStatus>() {
            Ok(status) => Command::Dispatch(vec![Msg::NewStatusChanged(status)]),
            Err(err) => Command::Invalid(err.to_string()),
        },
        "add" => parse_add(rest),
        other => Command::Invalid(format!("unknown command: {other}")),
    }
}

fn parse_add(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Dispatch(vec![Msg::SubmitClicked]);
    }

    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    let (company, title, status) = match parts.as_slice() {
        [company, title] => (*company, *title, None),
        [company, title, status] => (*company, *title, Some(*status)),
        _ => return Command::Invalid("usage: add <company> | <title> [| <status>]".to_string()),
    };

    let mut msgs = vec![
        Msg::CompanyChanged(company.to_string()),
        Msg::TitleChanged(title.to_string()),
    ];
    if let Some(status) = status {
        match status.parse::<JobStatus>() {
            Ok(status) => msgs.push(Msg::NewStatusChanged(status)),
            Err(err) => return Command::Invalid(err.to_string()),
        }
    }
    msgs.push(Msg::SubmitClicked);
    Command::Dispatch(msgs)
}

pub(crate) fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let options: Vec<String> = view.status_options.iter().map(ToString::to_string).collect();

    let _ = writeln!(out, "CareerFlow ({} jobs)", view.job_count);
    let _ = writeln!(
        out,
        "Search: {:?}  Status: {}  [{}]",
        view.criteria.query,
        view.criteria.status,
        options.join(", ")
    );
    if view.loading {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if let Some(hint) = view.empty_hint {
        let _ = writeln!(out, "{hint}");
    }
    for row in &view.rows {
        let _ = writeln!(
            out,
            "  [{:<9}] {} / {}  (#{})",
            row.status.as_str(),
            row.company,
            row.title,
            row.id
        );
    }
    let _ = write!(
        out,
        "New job: company={:?} title={:?} status={}  <{}>",
        view.form.company,
        view.form.title,
        view.form.status.label(),
        view.submit_label
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerflow_core::{update, AppState, Job, JobId};

    #[test]
    fn parses_filter_and_search() {
        assert_eq!(
            parse_command("search  glo "),
            Command::Dispatch(vec![Msg::QueryChanged("glo".to_string())])
        );
        assert_eq!(
            parse_command("search"),
            Command::Dispatch(vec![Msg::QueryChanged(String::new())])
        );
        assert_eq!(
            parse_command("filter rejected"),
            Command::Dispatch(vec![Msg::StatusFilterChanged(StatusFilter::Only(
                JobStatus::Rejected
            ))])
        );
        assert_eq!(
            parse_command("filter ALL"),
            Command::Dispatch(vec![Msg::StatusFilterChanged(StatusFilter::All)])
        );
        assert!(matches!(parse_command("filter maybe"), Command::Invalid(_)));
    }

    #[test]
    fn add_with_fields_fills_form_then_submits() {
        assert_eq!(
            parse_command("add Acme | SRE | applied"),
            Command::Dispatch(vec![
                Msg::CompanyChanged("Acme".to_string()),
                Msg::TitleChanged("SRE".to_string()),
                Msg::NewStatusChanged(JobStatus::Applied),
                Msg::SubmitClicked,
            ])
        );
        assert_eq!(parse_command("add"), Command::Dispatch(vec![Msg::SubmitClicked]));
        assert!(matches!(parse_command("add only-company"), Command::Invalid(_)));
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert!(matches!(parse_command("delete 3"), Command::Invalid(_)));
    }

    #[test]
    fn render_lists_visible_rows_and_errors() {
        let (state, _) = update(AppState::new(), Msg::Initialize);
        let (state, _) = update(
            state,
            Msg::JobsLoaded(Ok(vec![Job {
                id: JobId::Number(1),
                company: "Globex".to_string(),
                title: "Engineer".to_string(),
                status: JobStatus::Offer,
            }])),
        );
        let (state, _) = update(state, Msg::SubmitClicked);

        let text = render(&state.view());

        assert!(text.contains("CareerFlow (1 jobs)"));
        assert!(text.contains("[ALL, OFFER]"));
        assert!(text.contains("Globex / Engineer"));
        assert!(text.contains("Error: Company and title are required."));
        assert!(text.ends_with("<Add Job>"));
    }
}
