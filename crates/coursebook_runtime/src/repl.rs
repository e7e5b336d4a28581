//! The main REPL implementation.

use std::fs;
use std::io::Write;
use std::path::Path;

use coursebook_storage::Cascade;

use crate::command::{Command, HELP};
use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{CommandError, Result};
use crate::render::Renderer;
use crate::session::{Session, Tab};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Silent,
    /// Text to print.
    Text(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (catalog and view state).
    session: Session,

    /// Presentation settings.
    config: RuntimeConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        Self {
            editor,
            session: Session::new(),
            config,
        }
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until EOF or `quit`, writing replies to `out`.
    ///
    /// Command failures are reported and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.config.show_banner {
            writeln!(
                out,
                "Coursebook {}: type `help` for commands, Ctrl+D to exit.",
                env!("CARGO_PKG_VERSION")
            )?;
        }

        loop {
            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Reply::Silent) => {}
                Ok(Reply::Text(text)) => writeln!(out, "{text}")?,
                Ok(Reply::Quit) => break,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    /// Evaluates every line of a script, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error naming the failing line, or if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|source| CommandError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "evaluating script");

        for (index, line) in source.lines().enumerate() {
            let reply = self.eval(line).map_err(|e| CommandError::Script {
                path: path.to_path_buf(),
                line: index + 1,
                source: Box::new(e),
            })?;
            match reply {
                Reply::Silent => {}
                Reply::Text(text) => writeln!(out, "{text}")?,
                Reply::Quit => break,
            }
        }
        Ok(())
    }

    /// Parses and executes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or the catalog rejects it.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Reply::Silent);
        };
        self.execute(command).inspect_err(|e| {
            if let Some(domain) = e.as_domain() {
                tracing::warn!(error = %domain, "command rejected");
            }
        })
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog rejects the operation.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let s = &mut self.session;
        let text = match command {
            Command::Help => HELP.to_string(),
            Command::Show(tab) => {
                let tab = tab.unwrap_or(s.tab());
                return self.render(tab);
            }
            Command::Tab(tab) => {
                s.set_tab(tab);
                return self.render(tab);
            }
            Command::AddType(name) => {
                let id = s.add_course_type(&name)?;
                format!("added course type {id} ({name})")
            }
            Command::AddCourse(name) => {
                let id = s.add_course(&name)?;
                format!("added course {id} ({name})")
            }
            Command::RenameType(id, name) => {
                s.rename_course_type(id, &name)?;
                format!("renamed course type {id}")
            }
            Command::RenameCourse(id, name) => {
                s.rename_course(id, &name)?;
                format!("renamed course {id}")
            }
            Command::DeleteType(id) => {
                let cascade = s.delete_course_type(id)?;
                format!("deleted course type {id}{}", cascade_suffix(&cascade))
            }
            Command::DeleteCourse(id) => {
                let cascade = s.delete_course(id)?;
                format!("deleted course {id}{}", cascade_suffix(&cascade))
            }
            Command::DeleteOffering(id) => {
                let cascade = s.delete_offering(id)?;
                format!("deleted offering {id}{}", cascade_suffix(&cascade))
            }
            Command::Edit(target) => {
                s.begin_edit(target)?;
                format!("editing {target} (save <name> | cancel)")
            }
            Command::Save(name) => match s.commit_edit(&name)? {
                Some(target) => format!("renamed {target}"),
                None => "nothing is being edited".to_string(),
            },
            Command::Cancel => {
                s.cancel_edit();
                return Ok(Reply::Silent);
            }
            Command::SelectType(id) => {
                s.select_course_type(id)?;
                id.map_or_else(
                    || "cleared course type selection".to_string(),
                    |id| format!("selected course type {id}"),
                )
            }
            Command::SelectCourse(id) => {
                s.select_course(id)?;
                id.map_or_else(
                    || "cleared course selection".to_string(),
                    |id| format!("selected course {id}"),
                )
            }
            Command::Offer(ids) => {
                let id = match ids {
                    Some((course_type, course)) => s.create_offering(course_type, course)?,
                    None => s.submit_offering()?,
                };
                let name = s.catalog().offering(id).map_or("", |o| o.name.as_str());
                format!("created offering {id} ({name})")
            }
            Command::Filter(id) => {
                s.set_type_filter(id)?;
                return self.render(Tab::Offerings);
            }
            Command::Register(offering, student) => {
                let id = s.register_student(&student, offering)?;
                format!("registered {id} ({student}) for {offering}")
            }
            Command::Registrations(Some(offering)) => {
                let name = s.catalog().offering(offering).map_or("", |o| o.name.as_str());
                let mut text = format!("{offering}  {name}\n");
                Renderer::new(s, &self.config.date_format)
                    .offering_registrations(offering, &mut text)?;
                trim_newline(text)
            }
            Command::Registrations(None) => return self.render(Tab::Registrations),
            Command::Dump => serde_json::to_string_pretty(&s.catalog().snapshot())?,
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn render(&self, tab: Tab) -> Result<Reply> {
        let mut text = String::new();
        Renderer::new(&self.session, &self.config.date_format).tab(tab, &mut text)?;
        Ok(Reply::Text(trim_newline(text)))
    }
}

fn cascade_suffix(cascade: &Cascade) -> String {
    if cascade.is_empty() {
        String::new()
    } else {
        format!(
            " (removed {} offering(s), {} registration(s))",
            cascade.offerings.len(),
            cascade.registrations.len()
        )
    }
}

fn trim_newline(mut text: String) -> String {
    while text.ends_with('\n') {
        text.pop();
    }
    text
}
