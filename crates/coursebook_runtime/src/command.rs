//! The line-oriented command language.
//!
//! One command per line. The first word names the command; ids follow as
//! separate words; a trailing name argument takes the rest of the line so
//! names may contain spaces. Blank lines and `#` comments parse to nothing.

use std::str::FromStr;

use coursebook_foundation::{CourseId, CourseTypeId, OfferingId};

use crate::error::{CommandError, Result};
use crate::session::{EditTarget, Tab};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command reference.
    Help,
    /// Render a tab (the active one if `None`).
    Show(Option<Tab>),
    /// Switch to a tab and render it.
    Tab(Tab),
    /// Add a course type.
    AddType(String),
    /// Add a course.
    AddCourse(String),
    /// Rename a course type.
    RenameType(CourseTypeId, String),
    /// Rename a course.
    RenameCourse(CourseId, String),
    /// Delete a course type and its dependents.
    DeleteType(CourseTypeId),
    /// Delete a course and its dependents.
    DeleteCourse(CourseId),
    /// Delete an offering and its registrations.
    DeleteOffering(OfferingId),
    /// Enter edit mode for a course type or course.
    Edit(EditTarget),
    /// Rename the entity in edit mode.
    Save(String),
    /// Leave edit mode.
    Cancel,
    /// Select or clear the form's course type.
    SelectType(Option<CourseTypeId>),
    /// Select or clear the form's course.
    SelectCourse(Option<CourseId>),
    /// Create an offering from the form, or from explicit ids.
    Offer(Option<(CourseTypeId, CourseId)>),
    /// Set or clear the offerings filter.
    Filter(Option<CourseTypeId>),
    /// Register a student for an offering.
    Register(OfferingId, String),
    /// List registrations, for one offering or all of them.
    Registrations(Option<OfferingId>),
    /// Print the catalog as JSON.
    Dump,
    /// Leave the REPL.
    Quit,
}

/// Command names, for completion.
pub const COMMAND_NAMES: &[&str] = &[
    "help",
    "show",
    "tab",
    "add-type",
    "add-course",
    "rename-type",
    "rename-course",
    "delete-type",
    "delete-course",
    "delete-offering",
    "edit",
    "save",
    "cancel",
    "select-type",
    "select-course",
    "offer",
    "filter",
    "register",
    "registrations",
    "dump",
    "quit",
];

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  show [tab]                       render a tab (types, courses, offerings, registrations)
  tab <tab>                        switch tab and render it
  add-type <name>                  add a course type
  add-course <name>                add a course
  rename-type <id> <name>          rename a course type
  rename-course <id> <name>        rename a course
  delete-type <id>                 delete a course type, its offerings and registrations
  delete-course <id>               delete a course, its offerings and registrations
  delete-offering <id>             delete an offering and its registrations
  edit <type|course> <id>          start editing a name
  save <name>                      rename the entity being edited
  cancel                           stop editing
  select-type <id|none>            choose the course type for a new offering
  select-course <id|none>          choose the course for a new offering
  offer [<type-id> <course-id>]    create an offering
  filter <type-id|none>            filter offerings by course type
  register <offering-id> <name>    register a student
  registrations [<offering-id>]    list registrations
  dump                             print the catalog as JSON
  quit                             leave";

impl Command {
    /// Parses one line of input.
    ///
    /// Returns `Ok(None)` for blank lines and comments. Whitespace around the
    /// line and between arguments is a separator, so a name argument arrives
    /// with its outer whitespace removed and its inner spacing intact.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_word(line);
        let command = match word {
            "help" | "?" => Self::Help,
            "show" => Self::Show(optional(rest, "show [tab]")?),
            "tab" => Self::Tab(required(rest, "tab <tab>")?),
            "add-type" => Self::AddType(rest.to_string()),
            "add-course" => Self::AddCourse(rest.to_string()),
            "rename-type" => {
                let (id, name) = split_word(rest);
                Self::RenameType(parse_id(id, "rename-type <id> <name>")?, name.to_string())
            }
            "rename-course" => {
                let (id, name) = split_word(rest);
                Self::RenameCourse(parse_id(id, "rename-course <id> <name>")?, name.to_string())
            }
            "delete-type" => Self::DeleteType(required(rest, "delete-type <id>")?),
            "delete-course" => Self::DeleteCourse(required(rest, "delete-course <id>")?),
            "delete-offering" => Self::DeleteOffering(required(rest, "delete-offering <id>")?),
            "edit" => Self::Edit(parse_edit_target(rest)?),
            "save" => Self::Save(rest.to_string()),
            "cancel" => Self::Cancel,
            "select-type" => Self::SelectType(selection(rest, "select-type <id|none>")?),
            "select-course" => Self::SelectCourse(selection(rest, "select-course <id|none>")?),
            "offer" => Self::Offer(parse_offer(rest)?),
            "filter" => Self::Filter(selection(rest, "filter <type-id|none>")?),
            "register" => {
                let (id, name) = split_word(rest);
                Self::Register(parse_id(id, "register <offering-id> <name>")?, name.to_string())
            }
            "registrations" => Self::Registrations(optional(rest, "registrations [<offering-id>]")?),
            "dump" => Self::Dump,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Splits off the first word; the remainder has leading whitespace removed.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_id<T>(word: &str, usage: &'static str) -> Result<T>
where
    T: FromStr,
    CommandError: From<T::Err>,
{
    if word.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(word.parse()?)
}

/// Exactly one argument.
fn required<T>(rest: &str, usage: &'static str) -> Result<T>
where
    T: FromStr,
    CommandError: From<T::Err>,
{
    let (word, extra) = split_word(rest);
    if !extra.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    parse_id(word, usage)
}

/// Zero or one argument.
fn optional<T>(rest: &str, usage: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    CommandError: From<T::Err>,
{
    if rest.is_empty() {
        Ok(None)
    } else {
        required(rest, usage).map(Some)
    }
}

/// One argument, where `none` clears the selection.
fn selection<T>(rest: &str, usage: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    CommandError: From<T::Err>,
{
    match rest {
        "" => Err(CommandError::Usage(usage)),
        "none" | "-" => Ok(None),
        _ => required(rest, usage).map(Some),
    }
}

fn parse_edit_target(rest: &str) -> Result<EditTarget> {
    const USAGE: &str = "edit <type|course> <id>";
    let (kind, id) = split_word(rest);
    match kind {
        "type" => Ok(EditTarget::CourseType(required(id, USAGE)?)),
        "course" => Ok(EditTarget::Course(required(id, USAGE)?)),
        _ => Err(CommandError::Usage(USAGE)),
    }
}

fn parse_offer(rest: &str) -> Result<Option<(CourseTypeId, CourseId)>> {
    const USAGE: &str = "offer [<type-id> <course-id>]";
    if rest.is_empty() {
        return Ok(None);
    }
    let (course_type, course) = split_word(rest);
    Ok(Some((parse_id(course_type, USAGE)?, required(course, USAGE)?)))
}
