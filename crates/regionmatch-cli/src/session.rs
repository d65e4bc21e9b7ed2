//! Line-oriented interactive session.
//!
//! Each input line is one user event. Commands change the session state;
//! any other line goes through the name picker like text typed into a
//! combobox followed by Enter.
use crate::render;
use anyhow::Result;
use regionmatch_core::{
    AppState, Autocomplete, Axis, Dataset, GdpMode, LandUnit, RegionGroup, Settings,
};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  select <name> [--group us|eu]
                       select a region (exact name, any case); --group picks
                       the pool for names both pools share
  axis <land|pop|gdp|hdi>
  gdp <abs|per-capita>
  land <mi|km>
  count <n>            number of regions shown next to the selection
  show                 print the selection and the comparison table
  suggest <text>       list name suggestions
  help                 this text
  quit                 leave the session
Any other text picks the first matching region name.";

/// What the caller should do after a line was handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

pub struct Session<'d> {
    state: AppState<'d>,
    picker: Autocomplete,
}

impl<'d> Session<'d> {
    pub fn new(dataset: &'d Dataset, settings: Settings) -> Self {
        Session {
            state: AppState::with_settings(dataset, settings),
            picker: Autocomplete::for_dataset(dataset),
        }
    }

    pub fn state(&self) -> &AppState<'d> {
        &self.state
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Print(String::new());
        }
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Reply::Quit,
            "help" | "?" => Reply::Print(HELP.to_string()),
            "show" => Reply::Print(self.render_current()),
            "select" | "sel" => self.select(rest),
            "axis" => {
                let outcome = rest.parse::<Axis>().map(|a| self.state.set_axis(a));
                self.apply(outcome)
            }
            "gdp" => {
                let outcome = rest.parse::<GdpMode>().map(|m| self.state.set_gdp_mode(m));
                self.apply(outcome)
            }
            "land" => {
                let outcome = rest.parse::<LandUnit>().map(|u| self.state.set_land_unit(u));
                self.apply(outcome)
            }
            "count" => match rest.parse::<usize>() {
                Ok(n) => {
                    self.state.set_candidates(n);
                    Reply::Print(self.render_current())
                }
                Err(_) => Reply::Print(format!("Not a number: '{rest}'.")),
            },
            "suggest" => {
                self.picker.input(rest);
                Reply::Print(self.picker.suggestions().join("\n"))
            }
            _ => self.pick(line),
        }
    }

    /// `select <name>` or `select <name> --group <us|eu>`.
    fn select(&mut self, rest: &str) -> Reply {
        let (name, group) = match rest.split_once("--group") {
            Some((name, group)) => match group.parse::<RegionGroup>() {
                Ok(group) => (name.trim(), Some(group)),
                Err(e) => return Reply::Print(e.to_string()),
            },
            None => (rest, None),
        };
        let found = match group {
            Some(group) => self.state.select_in(group, name),
            None => self.state.select_region(name),
        };
        if !found {
            return Reply::Print(format!("No region named '{name}'."));
        }
        self.picker.input(name);
        Reply::Print(self.render_current())
    }

    fn apply<E: std::fmt::Display>(&self, outcome: std::result::Result<(), E>) -> Reply {
        match outcome {
            Ok(()) => Reply::Print(self.render_current()),
            Err(e) => Reply::Print(e.to_string()),
        }
    }

    /// Free text: an exact name selects directly, otherwise Enter commits the
    /// first suggestion.
    fn pick(&mut self, text: &str) -> Reply {
        self.picker.input(text);
        if self.state.select_region(text) {
            return Reply::Print(self.render_current());
        }
        let Some(name) = self.picker.enter().map(str::to_owned) else {
            return Reply::Print(format!("No region matches '{text}'. Type 'help' for commands."));
        };
        self.state.select_region(&name);
        Reply::Print(self.render_current())
    }

    fn render_current(&self) -> String {
        match (self.state.summary(), self.state.comparison()) {
            (Some(summary), Some(table)) => {
                format!("{}\n{}", render::summary(&summary), render::comparison_table(&table))
            }
            _ => "No region selected. Type a name to pick one.".to_string(),
        }
    }

    /// Reads lines until EOF or `quit`, writing every reply to `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "Type a region name, or 'help'.")?;
        for line in input.lines() {
            match self.handle_line(&line?) {
                Reply::Quit => break,
                Reply::Print(text) if text.is_empty() => {}
                Reply::Print(text) => writeln!(out, "{}", text.trim_end())?,
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<'static> {
        Session::new(Dataset::bundled().unwrap(), Settings::default())
    }

    #[test]
    fn free_text_commits_first_suggestion() {
        let mut s = session();
        let Reply::Print(text) = s.handle_line("massa") else {
            panic!("expected output");
        };
        assert!(text.contains("Massachusetts"));
        assert_eq!(s.state().selected().unwrap().name, "Massachusetts");
    }

    #[test]
    fn unknown_select_keeps_state() {
        let mut s = session();
        s.handle_line("select Ohio");
        let reply = s.handle_line("select Atlantis");
        assert_eq!(reply, Reply::Print("No region named 'Atlantis'.".into()));
        assert_eq!(s.state().selected().unwrap().name, "Ohio");
    }

    #[test]
    fn select_with_group_reaches_shared_names() {
        let mut s = session();
        s.handle_line("select Georgia");
        assert_eq!(s.state().selected().unwrap().group, RegionGroup::Domestic);

        let Reply::Print(text) = s.handle_line("select georgia --group eu") else {
            panic!("expected output");
        };
        assert!(text.contains("Region: Georgia (Europe)"));
        assert_eq!(s.state().selected().unwrap().group, RegionGroup::Foreign);
    }

    #[test]
    fn select_with_bad_group_keeps_state() {
        let mut s = session();
        s.handle_line("select Ohio");
        let Reply::Print(text) = s.handle_line("select Georgia --group asia") else {
            panic!("expected output");
        };
        assert!(text.contains("unknown region group"));
        assert_eq!(s.state().selected().unwrap().name, "Ohio");
    }

    #[test]
    fn axis_and_modes_update_state() {
        let mut s = session();
        s.handle_line("select Ohio");
        s.handle_line("axis gdp");
        s.handle_line("gdp per-capita");
        s.handle_line("land km");
        assert_eq!(s.state().axis(), Axis::Gdp);
        assert_eq!(s.state().gdp_mode(), GdpMode::PerCapita);
        assert_eq!(s.state().land_unit(), LandUnit::Metric);
    }

    #[test]
    fn bad_axis_reports_error() {
        let mut s = session();
        let Reply::Print(text) = s.handle_line("axis depth") else {
            panic!("expected output");
        };
        assert!(text.contains("unknown axis"));
        assert_eq!(s.state().axis(), Axis::Land);
    }

    #[test]
    fn quit_stops() {
        assert_eq!(session().handle_line("quit"), Reply::Quit);
    }
}
