use crate::history::{HistoryEvent, HistoryStack};
use crate::model::Developer;
use crate::recent::RecentList;
use crate::utils::{ellipsize, move_window};
use crate::{BoundedIndex, RawStdout};

use std::cell::RefCell;
use std::cmp::max;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

use termion::{
    clear::{All as ClearAll, CurrentLine as ClearCurrentLine},
    color::{Fg, Red, Reset as ColorReset},
    cursor::Goto,
    style::{Bold, Invert, NoInvert, Reset as StyleReset},
};

pub struct DrawArea {
    pub origin: (u16, u16),
    pub dimens: (u16, u16),
}

pub struct View {
    area: DrawArea,
    stdout: RawStdout,
    pub name_view: NameView,
    pub lang_view: LangListView,
    pub recent_view: RecentView,
    pub undo_view: UndoView,
    pub status_view: StatusView,
}

impl View {
    pub fn new(stdout: RawStdout) -> View {
        let name_view = NameView::new(stdout.clone());
        let lang_view = LangListView::new(stdout.clone());
        let recent_view = RecentView::new(stdout.clone());
        let undo_view = UndoView::new(stdout.clone());
        let status_view = StatusView::new(stdout.clone());

        View {
            area: DrawArea {
                origin: (1, 1),
                dimens: (64, 12),
            },
            stdout,
            name_view,
            lang_view,
            recent_view,
            undo_view,
            status_view,
        }
    }

    pub fn draw(
        &self,
        model: &Developer,
        history: &HistoryStack,
        recent: &RecentList,
    ) -> IoResult<()> {
        // limit scope of stdout here, because the subviews have their own reference.
        {
            let mut stdout = self.stdout.borrow_mut();
            write!(stdout, "{}", ClearAll)?;
        }

        self.name_view.draw(model)?;
        self.lang_view.draw(model)?;
        self.recent_view.draw(recent)?;
        self.undo_view.draw(history)?;
        self.status_view.draw()?;

        Ok(())
    }

    pub fn set_area(&mut self, area: DrawArea) {
        let DrawArea {
            origin: (x, y),
            dimens: (w, h),
        } = area;

        // Set minimum width/height to avoid overflow
        let (w, h) = (max(w, 64), max(h, 12));

        self.area = DrawArea {
            origin: (x, y),
            dimens: (w, h),
        };

        let body_h = h - 6;
        let left_w = w / 2;

        self.name_view.set_area(DrawArea {
            origin: (x, y),
            dimens: (w, 2),
        });

        self.lang_view.set_area(DrawArea {
            origin: (x, y + 2),
            dimens: (left_w, body_h),
        });

        self.recent_view.set_area(DrawArea {
            origin: (x + left_w + 2, y + 2),
            dimens: (w - left_w - 2, body_h),
        });

        self.undo_view.set_area(DrawArea {
            origin: (x, y + h - 3),
            dimens: (w, 1),
        });

        self.status_view.set_area(DrawArea {
            origin: (x, y + h - 2),
            dimens: (w, 2),
        });
    }
}

pub struct NameView {
    area: DrawArea,
    stdout: RawStdout,
}

impl NameView {
    pub fn new(stdout: RawStdout) -> NameView {
        NameView {
            area: DrawArea {
                origin: (1, 1),
                dimens: (64, 2),
            },
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    pub fn draw(&self, model: &Developer) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();
        let DrawArea {
            origin: (x, y),
            dimens: (w, _),
        } = self.area;

        if model.name().is_empty() {
            write!(
                stdout,
                "{}no developer loaded: open one with 1-3 or :<id>",
                Goto(x, y)
            )?;
            return Ok(());
        }

        let name = ellipsize(model.name(), w.saturating_sub(16) as usize);
        write!(stdout, "{}{}{}{}", Goto(x, y), Bold, name, StyleReset)?;
        write!(stdout, " (developer {})", model.id())?;

        Ok(())
    }
}

pub struct LangListView {
    selected: BoundedIndex,
    scroll_start: usize,
    area: DrawArea,
    stdout: RawStdout,
}

impl LangListView {
    pub fn new(stdout: RawStdout) -> LangListView {
        LangListView {
            selected: BoundedIndex::new(0, 0),
            scroll_start: 0,
            area: DrawArea {
                origin: (1, 3),
                dimens: (32, 6),
            },
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
        self.scroll();
    }

    pub fn selected(&self) -> usize {
        self.selected.into()
    }

    pub fn select(&mut self, index: usize) {
        self.selected.set_value(index);
        self.scroll();
    }

    pub fn select_prev(&mut self) {
        self.selected -= 1;
        self.scroll();
    }

    pub fn select_next(&mut self) {
        self.selected += 1;
        self.scroll();
    }

    pub fn set_bound(&mut self, len: usize) {
        self.selected.set_maximum(len.saturating_sub(1));
        self.scroll();
    }

    fn list_rows(&self) -> usize {
        self.area.dimens.1.saturating_sub(1) as usize
    }

    fn scroll(&mut self) {
        if let Some(start) = move_window(self.scroll_start, self.list_rows(), self.selected.into())
        {
            self.scroll_start = start;
        }
    }

    pub fn draw(&self, model: &Developer) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();
        let DrawArea {
            origin: (x, y),
            dimens: (w, _),
        } = self.area;

        write!(
            stdout,
            "{}{}favorite languages{}",
            Goto(x, y),
            Fg(Red),
            Fg(ColorReset)
        )?;

        if model.languages().is_empty() {
            write!(stdout, "{}(none yet: press a to add one)", Goto(x, y + 1))?;
            return Ok(());
        }

        let selected = usize::from(self.selected);
        let width = w.saturating_sub(4) as usize;

        for (index, language) in model
            .languages()
            .iter()
            .enumerate()
            .skip(self.scroll_start)
            .take(self.list_rows())
        {
            let line_y = y + 1 + (index - self.scroll_start) as u16;
            let name = ellipsize(&language.name, width);

            if index == selected {
                write!(stdout, "{}{}> {}{}", Goto(x, line_y), Invert, name, NoInvert)?;
            } else {
                write!(stdout, "{}  {}", Goto(x, line_y), name)?;
            }
        }

        Ok(())
    }
}

pub struct RecentView {
    area: DrawArea,
    stdout: RawStdout,
}

impl RecentView {
    pub fn new(stdout: RawStdout) -> RecentView {
        RecentView {
            area: DrawArea {
                origin: (33, 3),
                dimens: (32, 6),
            },
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    pub fn draw(&self, recent: &RecentList) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();
        let DrawArea {
            origin: (x, y),
            dimens: (w, h),
        } = self.area;

        write!(
            stdout,
            "{}{}recently viewed{}",
            Goto(x, y),
            Fg(Red),
            Fg(ColorReset)
        )?;

        let width = w.saturating_sub(6) as usize;

        for (row, entry) in recent
            .list()
            .iter()
            .take(h.saturating_sub(1) as usize)
            .enumerate()
        {
            let line_y = y + 1 + row as u16;
            let label = ellipsize(&entry.label, width);

            if row == 0 {
                write!(
                    stdout,
                    "{}{}{} {}{}",
                    Goto(x, line_y),
                    Bold,
                    entry.id,
                    label,
                    StyleReset
                )?;
            } else {
                write!(stdout, "{}{} {}", Goto(x, line_y), entry.id, label)?;
            }
        }

        Ok(())
    }
}

pub struct UndoView {
    area: DrawArea,
    stdout: RawStdout,
    activity: Rc<RefCell<Option<HistoryEvent>>>,
}

impl UndoView {
    pub fn new(stdout: RawStdout) -> UndoView {
        UndoView {
            area: DrawArea {
                origin: (1, 9),
                dimens: (64, 1),
            },
            stdout,
            activity: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    // Shared slot the controller wires to the history notifications.
    pub fn activity(&self) -> Rc<RefCell<Option<HistoryEvent>>> {
        Rc::clone(&self.activity)
    }

    pub fn draw(&self, history: &HistoryStack) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();
        let DrawArea {
            origin: (x, y), ..
        } = self.area;

        write!(stdout, "{}", Goto(x, y))?;

        if history.can_undo() {
            write!(stdout, "{}[u]undo{}", Invert, NoInvert)?;
        } else {
            write!(stdout, "[u]undo")?;
        }

        write!(stdout, "  ")?;

        if history.can_redo() {
            write!(stdout, "{}[C-r]redo{}", Invert, NoInvert)?;
        } else {
            write!(stdout, "[C-r]redo")?;
        }

        if let Some(event) = *self.activity.borrow() {
            let tag = match event {
                HistoryEvent::Reset => "loaded",
                HistoryEvent::Save => "saved",
                HistoryEvent::Undo => "undid",
                HistoryEvent::Redo => "redid",
            };
            write!(stdout, "  last: {}", tag)?;
        }

        Ok(())
    }
}

// Clone-able handle, so event subscribers can post messages into the bar
// while the view itself stays owned by the layout.
#[derive(Clone)]
pub struct StatusView {
    data: Rc<RefCell<StatusData>>,
    stdout: RawStdout,
}

struct StatusData {
    head: String,
    body: String,
    area: DrawArea,
}

impl StatusView {
    pub fn new(stdout: RawStdout) -> StatusView {
        StatusView {
            data: Rc::new(RefCell::new(StatusData {
                head: "devbook".into(),
                body: "".into(),
                area: DrawArea {
                    origin: (1, 11),
                    dimens: (64, 2),
                },
            })),
            stdout,
        }
    }

    pub fn set_head(&self, text: &str) {
        self.data.borrow_mut().head = text.into();
    }

    pub fn set_body(&self, text: &str) {
        self.data.borrow_mut().body = text.into();
    }

    pub fn set_area(&self, area: DrawArea) {
        self.data.borrow_mut().area = area;
    }

    pub fn draw(&self) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();
        let data = self.data.borrow();
        let DrawArea {
            origin: (x, y),
            dimens: (w, _),
        } = data.area;

        write!(
            stdout,
            "{}{}{}{}{}",
            Goto(x, y),
            ClearCurrentLine,
            Invert,
            format!("{:<pad$}", data.head, pad = (w as usize)),
            NoInvert
        )?;
        write!(stdout, "{}{}{}", Goto(x, y + 1), ClearCurrentLine, data.body)?;

        let hint = "a:add d:del r:rename u:undo C-r:redo ::open q:quit";
        if (w as usize) > hint.len() + data.body.len() + 2 {
            write!(stdout, "{}{}", Goto(x + w - hint.len() as u16, y + 1), hint)?;
        }

        stdout.flush()?;

        Ok(())
    }
}
