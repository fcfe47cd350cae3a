use crate::editing::{Cmd, Patch, Session};
use crate::export::{ExportedPage, export_page};
use crate::models::ElementId;
use crate::view::{ClickAction, Host, index, render};

/// Interaction reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on a rendered element. Carries only the innermost element hit;
    /// ancestors never see it.
    Click(ElementId),
    /// A rendered element lost focus
    Blur(ElementId),
    /// Click on the presentation surface outside every element
    BackgroundClick,
    /// An index panel entry was activated
    IndexActivated(ElementId),
}

/// Owns the session and keeps a host in sync with it.
///
/// At most one element is in text-editing mode at a time. Any other
/// interaction blurs it first, committing its text.
#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    /// Element with an open text-edit session
    editing: Option<ElementId>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editing(&self) -> Option<&ElementId> {
        self.editing.as_ref()
    }

    /// Bring a freshly attached host up to date
    pub fn attach<H: Host + ?Sized>(&self, host: &mut H) {
        self.sync(host);
    }

    /// Apply a command and resynchronize the host
    pub fn apply<H: Host + ?Sized>(&mut self, cmd: Cmd, host: &mut H) -> Patch {
        self.finish_edit(host);

        let patch = self.session.apply(cmd);
        if patch.tree_changed() {
            self.sync(host);
        } else if patch.targeting_changed {
            host.show_workspace(&self.session.workspace_label());
        }
        patch
    }

    pub fn handle<H: Host + ?Sized>(&mut self, event: Event, host: &mut H) {
        match event {
            Event::Click(id) => self.click(id, host),
            Event::Blur(id) => {
                if self.editing.as_ref() == Some(&id) {
                    self.finish_edit(host);
                }
            }
            Event::BackgroundClick => {
                self.apply(Cmd::ClearTarget, host);
            }
            Event::IndexActivated(id) => {
                // Same path as clicking the rendered element itself
                if host.lookup(&id).is_some() {
                    self.click(id, host);
                }
            }
        }
    }

    /// Export the page and open it in the host's viewer
    pub fn export<H: Host + ?Sized>(&mut self, host: &mut H) -> ExportedPage {
        self.finish_edit(host);

        let page = export_page(self.session.page());
        log::info!(
            "exported {} bytes of markup, {} bytes of stylesheet",
            page.markup.len(),
            page.stylesheet.len()
        );
        host.open_export(&page);
        page
    }

    fn click<H: Host + ?Sized>(&mut self, id: ElementId, host: &mut H) {
        if self.editing.as_ref() == Some(&id) {
            // Caret placement inside the element being edited
            return;
        }
        self.finish_edit(host);

        let Some(element) = host.lookup(&id) else {
            return;
        };
        let Some(action) = host.click_action(element) else {
            return;
        };

        self.session.apply(Cmd::Select(id.clone()));
        match action {
            ClickAction::EnterContainer => {
                self.session.apply(Cmd::EnterContainer(id));
                host.show_workspace(&self.session.workspace_label());
            }
            ClickAction::EditText => {
                host.set_editable(element, true);
                host.focus(element);
                self.editing = Some(id);
            }
        }
    }

    /// Close the open edit session, writing the displayed text into the model
    fn finish_edit<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Some(id) = self.editing.take() else {
            return;
        };
        let Some(element) = host.lookup(&id) else {
            return;
        };
        host.set_editable(element, false);
        let text = host.text(element);

        let patch = self.session.apply(Cmd::SetText { id, text });
        if patch.tree_changed() {
            self.sync(host);
        }
    }

    fn sync<H: Host + ?Sized>(&self, host: &mut H) {
        let page = self.session.page();
        render::rebuild(page, host);
        index::rebuild(page, host);
        host.show_workspace(&self.session.workspace_label());
    }
}
