use crate::task::Task;
use chrono::Local;

/// Which draft field the input form is currently feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Description,
}

/// Pending destructive action awaiting a yes/no from the confirmation popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    DeleteOne(u64),
    DeleteAll,
}

/// Staged text shared by the create and edit paths. While no edit is active
/// it is the draft for a new task; while editing it holds the edited text.
#[derive(Debug, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct TodoList {
    pub tasks: Vec<Task>,
    pub draft: Draft,
    pub focus: Field,
    pub editing: Option<u64>,
    pub confirm: Option<Confirm>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form: append a new task, or save the active edit.
    /// Blank title or description (after trimming) is rejected silently.
    pub fn submit(&mut self) {
        let title = self.draft.title.trim();
        let description = self.draft.description.trim();
        if title.is_empty() || description.is_empty() {
            return;
        }
        match self.editing {
            None => {
                self.next_id += 1;
                self.tasks.push(Task {
                    id: self.next_id,
                    title: title.to_string(),
                    description: description.to_string(),
                    created_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
                    done: false,
                });
            }
            Some(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = title.to_string();
                    task.description = description.to_string();
                }
                self.editing = None;
            }
        }
        self.draft = Draft::default();
        self.focus = Field::Title;
    }

    /// Load a task's text into the draft and start editing it. The only way
    /// back out is a valid submit.
    pub fn begin_edit(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.draft.title = task.title.clone();
            self.draft.description = task.description.clone();
            self.editing = Some(id);
            self.focus = Field::Title;
        }
    }

    pub fn toggle_done(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
        }
    }

    /// One switch for the whole list: everything done if anything is pending,
    /// otherwise everything back to pending.
    pub fn toggle_done_all(&mut self) {
        let all_done = self.tasks.iter().all(|t| t.done);
        for task in &mut self.tasks {
            task.done = !all_done;
        }
    }

    pub fn request_delete(&mut self, id: u64) {
        self.confirm = Some(Confirm::DeleteOne(id));
    }

    pub fn request_delete_all(&mut self) {
        self.confirm = Some(Confirm::DeleteAll);
    }

    /// Carry out whatever the open confirmation popup asked about.
    /// A stale id (task already gone) leaves the list untouched.
    pub fn confirm_pending(&mut self) {
        match self.confirm.take() {
            Some(Confirm::DeleteOne(id)) => self.tasks.retain(|t| t.id != id),
            Some(Confirm::DeleteAll) => self.tasks.clear(),
            None => {}
        }
    }

    pub fn cancel_pending(&mut self) {
        self.confirm = None;
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Field::Title => self.draft.title.push(c),
            Field::Description => self.draft.description.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            Field::Title => self.draft.title.pop(),
            Field::Description => self.draft.description.pop(),
        };
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Field::Title => Field::Description,
            Field::Description => Field::Title,
        };
    }
}
