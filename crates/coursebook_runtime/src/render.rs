//! Text rendering of the session tabs.

use std::fmt::{self, Write};

use chrono::{DateTime, Local, Utc};
use coursebook_foundation::OfferingId;

use crate::session::{EditMode, EditTarget, Session, Tab};

/// Renders session views as plain text.
pub struct Renderer<'a> {
    session: &'a Session,
    date_format: &'a str,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer. `date_format` must be a valid `strftime` format.
    #[must_use]
    pub const fn new(session: &'a Session, date_format: &'a str) -> Self {
        Self {
            session,
            date_format,
        }
    }

    /// Renders one tab.
    pub fn tab(&self, tab: Tab, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "== {} ==", tab.title())?;
        match tab {
            Tab::CourseTypes => self.course_types(out),
            Tab::Courses => self.courses(out),
            Tab::Offerings => self.offerings(out),
            Tab::Registrations => self.registrations(out),
        }
    }

    /// Renders the students registered for one offering.
    pub fn offering_registrations(&self, offering: OfferingId, out: &mut impl Write) -> fmt::Result {
        let mut any = false;
        for reg in self.session.catalog().list_by_offering(offering) {
            any = true;
            writeln!(
                out,
                "    {}  {}  {}",
                reg.id,
                reg.student_name,
                self.date(&reg.registered_at)
            )?;
        }
        if !any {
            writeln!(out, "    (no students)")?;
        }
        Ok(())
    }

    fn course_types(&self, out: &mut impl Write) -> fmt::Result {
        let types = self.session.catalog().course_types();
        if types.is_empty() {
            return writeln!(out, "  (none)");
        }
        for t in types {
            let marker = self.edit_marker(EditTarget::CourseType(t.id));
            writeln!(out, "  {}  {}{marker}", t.id, t.name)?;
        }
        Ok(())
    }

    fn courses(&self, out: &mut impl Write) -> fmt::Result {
        let courses = self.session.catalog().courses();
        if courses.is_empty() {
            return writeln!(out, "  (none)");
        }
        for c in courses {
            let marker = self.edit_marker(EditTarget::Course(c.id));
            writeln!(out, "  {}  {}{marker}", c.id, c.name)?;
        }
        Ok(())
    }

    fn offerings(&self, out: &mut impl Write) -> fmt::Result {
        let catalog = self.session.catalog();

        let form = self.session.offering_form();
        writeln!(
            out,
            "  form: type={} course={}",
            form.course_type.map_or_else(|| "-".to_string(), |id| id.to_string()),
            form.course.map_or_else(|| "-".to_string(), |id| id.to_string()),
        )?;

        match self.session.type_filter() {
            Some(id) => {
                let name = catalog.course_type(id).map_or("", |t| t.name.as_str());
                writeln!(out, "  filter: {id} {name}")?;
            }
            None => writeln!(out, "  filter: all types")?,
        }

        let mut any = false;
        for offering in self.session.visible_offerings() {
            any = true;
            writeln!(out, "  {}  {}", offering.id, offering.name)?;
            self.offering_registrations(offering.id, out)?;
        }
        if !any {
            writeln!(out, "  (none)")?;
        }
        Ok(())
    }

    fn registrations(&self, out: &mut impl Write) -> fmt::Result {
        let mut any = false;
        for view in self.session.catalog().list_all() {
            any = true;
            let reg = view.registration;
            writeln!(
                out,
                "  {}  {} \u{2022} {}  {}",
                reg.id,
                reg.student_name,
                view.offering_name(),
                self.date(&reg.registered_at)
            )?;
        }
        if !any {
            writeln!(out, "  (none)")?;
        }
        Ok(())
    }

    fn edit_marker(&self, target: EditTarget) -> &'static str {
        if self.session.edit_mode() == EditMode::Editing(target) {
            "  [editing]"
        } else {
            ""
        }
    }

    /// Registration dates are shown on the local calendar.
    fn date(&self, at: &DateTime<Utc>) -> impl fmt::Display + '_ {
        at.with_timezone(&Local).format(self.date_format)
    }
}
