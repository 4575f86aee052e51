//! Toolkit-independent state of the main notes page.
//!
//! [`NotesPage`] owns the [`Notebook`] and reacts to [`Message`]s. The iced
//! layer in [`crate::app`] only renders this state and forwards user input.

use jotnotes_core::{validate_title, JotnotesError, Note, Notebook, MAX_TITLE_CHARS};

/// Status line text when a search matches nothing.
pub const NOTHING_FOUND: &str = "Nothing found";

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SearchSubmitted,
    OpenNewNote,
    TitleChanged(String),
    ContentChanged(String),
    ConfirmNewNote,
    CancelNewNote,
    OpenNote(i64),
    CloseNote,
    DeleteNote(i64),
}

/// Input buffer of the note creation dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewNoteForm {
    pub title: String,
    pub content: String,
    /// Set when the last confirm attempt was rejected.
    pub error: Option<String>,
}

/// The dialog currently shown above the note list, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    NewNote(NewNoteForm),
    ViewNote(Note),
}

pub struct NotesPage {
    notebook: Notebook,
    search_text: String,
    notes: Vec<Note>,
    status: String,
    dialog: Option<Dialog>,
}

impl NotesPage {
    /// Builds the page and loads the initial, unfiltered note list.
    pub fn new(notebook: Notebook) -> Self {
        let mut page = Self {
            notebook,
            search_text: String::new(),
            notes: Vec::new(),
            status: String::new(),
            dialog: None,
        };
        page.refresh();
        page
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SearchChanged(text) => {
                self.search_text = text;
                self.refresh();
            }
            Message::SearchSubmitted => self.refresh(),
            Message::OpenNewNote => {
                self.dialog = Some(Dialog::NewNote(NewNoteForm::default()));
            }
            Message::TitleChanged(title) => {
                if let Some(Dialog::NewNote(form)) = &mut self.dialog {
                    form.title = title.chars().take(MAX_TITLE_CHARS).collect();
                }
            }
            Message::ContentChanged(content) => {
                if let Some(Dialog::NewNote(form)) = &mut self.dialog {
                    form.content = content;
                }
            }
            Message::ConfirmNewNote => self.confirm_new_note(),
            Message::CancelNewNote | Message::CloseNote => self.dialog = None,
            Message::OpenNote(id) => match self.notebook.fetch_note_by_id(id) {
                Ok(note) => self.dialog = Some(Dialog::ViewNote(note)),
                Err(e) => {
                    self.refresh();
                    self.report(&e);
                }
            },
            Message::DeleteNote(id) => {
                self.dialog = None;
                let result = self.notebook.delete_note(id);
                self.refresh();
                if let Err(e) = result {
                    self.report(&e);
                }
            }
        }
    }

    fn confirm_new_note(&mut self) {
        let Some(Dialog::NewNote(form)) = &mut self.dialog else {
            return;
        };
        if let Err(e) = validate_title(&form.title) {
            form.error = Some(e.user_message());
            return;
        }

        let result = self.notebook.add_note(&form.title, &form.content);
        match result {
            Ok(_) => {
                self.dialog = None;
                self.refresh();
            }
            Err(e) => self.report(&e),
        }
    }

    /// Re-runs the search for the current search box text.
    fn refresh(&mut self) {
        match self.notebook.search_notes(self.search_text.trim()) {
            Ok(notes) => {
                self.status = if notes.is_empty() {
                    NOTHING_FOUND.to_string()
                } else {
                    format!("Notes found: {}", notes.len())
                };
                self.notes = notes;
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, error: &JotnotesError) {
        log::error!("{error}");
        self.status = error.user_message();
    }
}
