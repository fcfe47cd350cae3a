use crossterm::event::{KeyCode, KeyEvent};
use pagesmith_engine::{
    Cmd, Controller, ElementType, Event, LayoutKind, RetainedSurface, io as export_io,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// What a key press asks the main loop to do next
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub controller: Controller,
    pub surface: RetainedSurface,
    pub index_state: ListState,
    pub export_dir: PathBuf,
    /// One-line feedback shown in the status bar
    pub status: String,
}

impl App {
    pub fn new(export_dir: PathBuf) -> Self {
        let controller = Controller::new();
        let mut surface = RetainedSurface::new();
        controller.attach(&mut surface);

        Self {
            controller,
            surface,
            index_state: ListState::default(),
            export_dir,
            status: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if self.surface.export().is_some() {
            self.handle_export_key(key);
            return Flow::Continue;
        }
        if let Some(id) = self.controller.editing().cloned() {
            match key.code {
                KeyCode::Char(c) => {
                    if let Some(text) = self.surface.editing_text_mut() {
                        text.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(text) = self.surface.editing_text_mut() {
                        text.pop();
                    }
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.controller.handle(Event::Blur(id), &mut self.surface);
                    self.status = "Text saved".to_string();
                }
                _ => {}
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char('p') => self.add_element(ElementType::Paragraph),
            KeyCode::Char('1') => self.add_element(ElementType::Heading1),
            KeyCode::Char('2') => self.add_element(ElementType::Heading2),
            KeyCode::Char('d') => self.add_element(ElementType::Div),
            KeyCode::Char('s') => self.add_element(ElementType::Span),
            KeyCode::Char('b') => self.add_element(ElementType::Button),
            KeyCode::Char('r') => self.add_layout(LayoutKind::Row),
            KeyCode::Char('c') => self.add_layout(LayoutKind::Column),
            KeyCode::Char('m') => self.add_layout(LayoutKind::Center),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => self.activate_entry(),
            KeyCode::Esc => {
                self.controller
                    .handle(Event::BackgroundClick, &mut self.surface);
            }
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('e') => {
                self.controller.export(&mut self.surface);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('w') => {
                if let Some(page) = self.surface.export() {
                    self.status = match export_io::write_export(&self.export_dir, page) {
                        Ok(_) => format!("Wrote export to {}", self.export_dir.display()),
                        Err(e) => {
                            log::error!("export write failed: {e}");
                            format!("Export failed: {e}")
                        }
                    };
                }
                self.surface.close_export();
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.surface.close_export();
            }
            _ => {}
        }
    }

    fn add_element(&mut self, element_type: ElementType) {
        let patch = self
            .controller
            .apply(Cmd::AddElement(element_type), &mut self.surface);
        if let Some((id, _)) = patch.added {
            self.status = format!("Added {id}");
        }
        self.clamp_cursor();
    }

    fn add_layout(&mut self, kind: LayoutKind) {
        let patch = self
            .controller
            .apply(Cmd::AddLayout(kind), &mut self.surface);
        if let Some((id, _)) = patch.added {
            self.status = format!("Added {id}");
        }
        self.clamp_cursor();
    }

    fn remove_selected(&mut self) {
        let patch = self
            .controller
            .apply(Cmd::RemoveSelected, &mut self.surface);
        self.status = match patch.removed.first() {
            Some(id) => format!("Removed {id}"),
            None => "Nothing selected".to_string(),
        };
        self.clamp_cursor();
    }

    fn activate_entry(&mut self) {
        if let Some(index) = self.index_state.selected()
            && let Some(entry) = self.surface.index().get(index)
        {
            let id = entry.id.clone();
            self.controller
                .handle(Event::IndexActivated(id), &mut self.surface);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.surface.index().len();
        if len == 0 {
            self.index_state.select(None);
            return;
        }
        let i = match self.index_state.selected() {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None => 0,
        };
        self.index_state.select(Some(i));
    }

    fn clamp_cursor(&mut self) {
        let len = self.surface.index().len();
        match self.index_state.selected() {
            _ if len == 0 => self.index_state.select(None),
            Some(i) if i >= len => self.index_state.select(Some(len - 1)),
            None => self.index_state.select(Some(0)),
            _ => {}
        }
    }
}
