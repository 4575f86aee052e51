//! iced front-end for the notes page.

use crate::settings::ThemeChoice;
use crate::state::{self, Dialog, NewNoteForm, NotesPage};
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, text_editor, text_input, Column,
};
use iced::{Color, Element, Length, Task, Theme};
use jotnotes_core::{Note, Notebook};

pub struct JotnotesApp {
    page: NotesPage,
    editor: text_editor::Content,
    theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Page(state::Message),
    EditorAction(text_editor::Action),
}

impl JotnotesApp {
    pub fn new(notebook: Notebook, theme: ThemeChoice) -> Self {
        Self {
            page: NotesPage::new(notebook),
            editor: text_editor::Content::new(),
            theme: match theme {
                ThemeChoice::Light => Theme::Light,
                ThemeChoice::Dark => Theme::Dark,
            },
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(msg) => {
                // The editor buffer belongs to the creation dialog.
                if matches!(msg, state::Message::OpenNewNote) {
                    self.editor = text_editor::Content::new();
                }
                self.page.update(msg);
            }
            Message::EditorAction(action) => {
                self.editor.perform(action);
                self.page
                    .update(state::Message::ContentChanged(editor_body(&self.editor)));
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let search = row![
            text_input("Enter a note title or keywords", self.page.search_text())
                .on_input(|s| Message::Page(state::Message::SearchChanged(s)))
                .on_submit(Message::Page(state::Message::SearchSubmitted))
                .padding(10),
            button(text("Search"))
                .on_press(Message::Page(state::Message::SearchSubmitted))
                .padding(10),
        ]
        .spacing(10);

        let add = button(text("+").size(40))
            .on_press(Message::Page(state::Message::OpenNewNote))
            .style(button::success)
            .width(Length::Fill)
            .padding(10);

        let list = scrollable(
            Column::with_children(self.page.notes().iter().map(note_item))
                .spacing(10)
                .padding(20),
        )
        .height(Length::Fill);

        let base = column![search, add, list, text(self.page.status())]
            .spacing(10)
            .padding(20);

        match self.page.dialog() {
            None => base.into(),
            Some(Dialog::NewNote(form)) => modal(
                base,
                self.new_note_dialog(form),
                Message::Page(state::Message::CancelNewNote),
            ),
            Some(Dialog::ViewNote(note)) => modal(
                base,
                note_dialog(note),
                Message::Page(state::Message::CloseNote),
            ),
        }
    }

    fn new_note_dialog<'a>(&'a self, form: &'a NewNoteForm) -> Element<'a, Message> {
        let (hint, hint_color) = match &form.error {
            Some(error) => (error.as_str(), Some(Color::from_rgb(0.8, 0.1, 0.1))),
            None => ("Enter the note title", None),
        };

        let mut title_label = text("Note title");
        if let Some(color) = hint_color {
            title_label = title_label.color(color);
        }

        let body = column![
            text("New note").size(32),
            title_label,
            text_input(hint, &form.title)
                .on_input(|s| Message::Page(state::Message::TitleChanged(s)))
                .on_submit(Message::Page(state::Message::ConfirmNewNote))
                .padding(8),
            text("Note content"),
            text_editor(&self.editor)
                .on_action(Message::EditorAction)
                .height(Length::Fill),
            row![
                horizontal_space(),
                button(text("Add")).on_press(Message::Page(state::Message::ConfirmNewNote)),
                button(text("Cancel"))
                    .on_press(Message::Page(state::Message::CancelNewNote))
                    .style(button::danger),
            ]
            .spacing(10),
        ]
        .spacing(10);

        dialog_frame(body)
    }
}

/// Returns the editor text without the newline the buffer always ends with.
fn editor_body(editor: &text_editor::Content) -> String {
    let text = editor.text();
    match text.strip_suffix('\n') {
        Some(body) => body.to_string(),
        None => text,
    }
}

fn note_item(note: &Note) -> Element<'_, Message> {
    button(text(&note.title).size(32))
        .on_press(Message::Page(state::Message::OpenNote(note.id)))
        .style(button::secondary)
        .width(Length::Fill)
        .padding(10)
        .into()
}

fn note_dialog(note: &Note) -> Element<'_, Message> {
    let body = column![
        text(&note.title).size(32),
        scrollable(text(note.display_content())).height(Length::Fill),
        row![
            button(text("Back")).on_press(Message::Page(state::Message::CloseNote)),
            horizontal_space(),
            button(text("Delete"))
                .on_press(Message::Page(state::Message::DeleteNote(note.id)))
                .style(button::danger),
        ],
    ]
    .spacing(10);

    dialog_frame(body)
}

fn dialog_frame<'a>(body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(body)
        .width(Length::Fixed(600.0))
        .height(Length::Fixed(600.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

/// Layers `content` over `base`; clicking outside `content` emits `on_blur`.
fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Opens the main window and blocks until it is closed.
pub fn run(notebook: Notebook, theme: ThemeChoice) -> iced::Result {
    iced::application("Jotnotes", JotnotesApp::update, JotnotesApp::view)
        .theme(|app: &JotnotesApp| app.theme.clone())
        .window_size((800.0, 900.0))
        .resizable(false)
        .run_with(move || (JotnotesApp::new(notebook, theme), Task::none()))
}
