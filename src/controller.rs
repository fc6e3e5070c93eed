use crate::command::{Command, UiState};
use crate::history::HistoryStack;
use crate::model::{DevId, Developer};
use crate::recent::{RecentEvent, RecentList};
use crate::store::Store;
use crate::utils::save_to_clipboard;
use crate::view::{DrawArea, View};

use termion::event::Key;

pub struct Controller {
    pub state: UiState,
    pub model: Developer,
    pub history: HistoryStack,
    pub recent: RecentList,
    pub view: View,
    store: Store,
    yank: Option<String>,
}

fn profile_text(model: &Developer) -> String {
    format!("{}: {}", model.name(), model.languages().names().join(", "))
}

impl Controller {
    pub fn new(mut model: Developer, view: View, store: Store) -> Controller {
        let history = HistoryStack::attach(&mut model);
        let recent = RecentList::attach(&mut model, RecentList::DEFAULT_LIMIT);

        // The undo line shows what the history last did.
        let activity = view.undo_view.activity();
        history.subscribe(move |event| {
            *activity.borrow_mut() = Some(*event);
        });

        // Every fresh load retitles the status bar.
        let status = view.status_view.clone();
        recent.subscribe(move |event| {
            let RecentEvent::Add(entry) = event;
            status.set_head(&format!("devbook - {} (developer {})", entry.label, entry.id));
        });

        Controller {
            state: UiState::Normal,
            model,
            history,
            recent,
            view,
            store,
            yank: None,
        }
    }

    // Opening

    pub fn open(&mut self, id: DevId) {
        match self.store.fetch(id) {
            Ok(record) => {
                self.model.load(id, record);
                self.view.status_view.set_body("");
            }
            Err(error) => {
                self.view.status_view.set_body(&format!("error: {}", error));
            }
        }
    }

    // Editing

    fn add_language(&mut self, name: &str) {
        self.model.add_language(name);

        let last = self.model.languages().len().saturating_sub(1);
        self.view.lang_view.set_bound(self.model.languages().len());
        self.view.lang_view.select(last);
        self.view.status_view.set_body(&format!("added {}", name));
    }

    fn remove_selected(&mut self) {
        if self.model.languages().is_empty() {
            self.view.status_view.set_body("no languages to remove");
            return;
        }

        let index = self.view.lang_view.selected();
        if let Some(removed) = self.model.remove_language(index) {
            self.yank = Some(removed.name.clone());
            self.view
                .status_view
                .set_body(&format!("removed {}", removed.name));
        }
    }

    fn yank_selected(&mut self) {
        let index = self.view.lang_view.selected();
        if let Some(language) = self.model.languages().get(index) {
            let name = language.name.clone();
            self.view.status_view.set_body(&format!("yanked {}", name));
            self.yank = Some(name);
        }
    }

    fn copy_profile(&mut self) {
        let text = profile_text(&self.model);
        match save_to_clipboard(&text) {
            Ok(msg) | Err(msg) => self.view.status_view.set_body(&msg),
        }
    }

    // History

    fn undo(&mut self) {
        if !self.history.undo(&mut self.model) {
            self.view.status_view.set_body("nothing to undo");
        }
    }

    fn redo(&mut self) {
        if !self.history.redo(&mut self.model) {
            self.view.status_view.set_body("nothing to redo");
        }
    }

    // Views

    pub fn resize_view(&mut self, size: (u16, u16)) {
        self.view.set_area(DrawArea {
            origin: (1, 1),
            dimens: size,
        });
    }

    pub fn update_view(&mut self) {
        if let Err(error) = self.view.draw(&self.model, &self.history, &self.recent) {
            // What to do when drawing failed?
            // Try to report this on stderr and ignore further failures.
            eprintln!("{}", error);
        }
    }

    // Transitions

    pub fn transition(&mut self, key: Key) -> bool {
        use termion::event::Key::{Backspace, Char, Ctrl, Delete, Down, Esc, Up};

        let mut run = true;

        self.state = match self.state.clone() {
            UiState::Normal => match key {
                Up | Char('k') => {
                    self.view.lang_view.select_prev();
                    UiState::Normal
                }
                Down | Char('j') => {
                    self.view.lang_view.select_next();
                    UiState::Normal
                }
                Char('a') => {
                    self.view.status_view.set_body("add language: ");
                    UiState::Insert(String::new())
                }
                Char('r') => {
                    let current = self.model.name().to_owned();
                    self.view
                        .status_view
                        .set_body(&format!("rename: {}", current));
                    UiState::Rename(current)
                }
                Delete | Char('d') | Char('x') => {
                    self.remove_selected();
                    UiState::Normal
                }
                Char('y') => {
                    self.yank_selected();
                    UiState::Normal
                }
                Char('p') => {
                    if let Some(name) = self.yank.clone() {
                        self.add_language(&name);
                    }
                    UiState::Normal
                }
                Char('u') => {
                    self.undo();
                    UiState::Normal
                }
                Ctrl('r') => {
                    self.redo();
                    UiState::Normal
                }
                Ctrl('c') => {
                    self.copy_profile();
                    UiState::Normal
                }
                Char(':') => {
                    self.view.status_view.set_body(":");
                    UiState::Command(String::new())
                }
                Char('q') => {
                    run = false;
                    UiState::Normal
                }
                Char(c) if c.is_digit(10) => {
                    self.open(DevId::from(c.to_digit(10).unwrap()));
                    UiState::Normal
                }
                Esc => {
                    self.view.status_view.set_body("");
                    UiState::Normal
                }
                _ => UiState::Normal,
            },
            UiState::Insert(mut input) => match key {
                Char('\n') => {
                    if input.is_empty() {
                        self.view.status_view.set_body("");
                    } else {
                        self.add_language(&input);
                    }
                    UiState::Normal
                }
                Backspace => {
                    input.pop();
                    self.view
                        .status_view
                        .set_body(&format!("add language: {}", input));
                    UiState::Insert(input)
                }
                Char(c) if c != '\t' => {
                    input.push(c);
                    self.view
                        .status_view
                        .set_body(&format!("add language: {}", input));
                    UiState::Insert(input)
                }
                Esc => {
                    self.view.status_view.set_body("");
                    UiState::Normal
                }
                _ => UiState::Insert(input),
            },
            UiState::Rename(mut input) => match key {
                Char('\n') => {
                    self.model.set_name(&input);
                    self.view
                        .status_view
                        .set_body(&format!("renamed to {}", input));
                    UiState::Normal
                }
                Backspace => {
                    input.pop();
                    self.view.status_view.set_body(&format!("rename: {}", input));
                    UiState::Rename(input)
                }
                Char(c) if c != '\t' => {
                    input.push(c);
                    self.view.status_view.set_body(&format!("rename: {}", input));
                    UiState::Rename(input)
                }
                Esc => {
                    self.view.status_view.set_body("");
                    UiState::Normal
                }
                _ => UiState::Rename(input),
            },
            UiState::Command(mut cmd) => match key {
                Char('\n') => {
                    match Command::parse(&cmd) {
                        Ok(Command::Quit) => {
                            run = false;
                        }
                        Ok(Command::Open(id)) => {
                            self.open(id);
                        }
                        Err(msg) => {
                            self.view.status_view.set_body(msg);
                        }
                    }
                    UiState::Normal
                }
                Backspace => {
                    cmd.pop();
                    self.view.status_view.set_body(&format!(":{}", &cmd));
                    UiState::Command(cmd)
                }
                Char(c) => {
                    cmd.push(c);
                    self.view.status_view.set_body(&format!(":{}", &cmd));
                    UiState::Command(cmd)
                }
                Esc => {
                    self.view.status_view.set_body("");
                    UiState::Normal
                }
                _ => UiState::Command(cmd),
            },
        };

        self.view
            .lang_view
            .set_bound(self.model.languages().len());

        run
    }
}
