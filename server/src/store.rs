//! In-memory todo storage.
//!
//! Todos are kept in insertion order. Ids start at 1 and only ever grow, so a
//! deleted id is never handed out again.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body of both create and update requests.
#[derive(Clone, Debug, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: i64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn create(&mut self, input: TodoCreate) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Overwrite every editable field of `id`. Position in the list is kept.
    pub fn replace(&mut self, id: i64, input: TodoCreate) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.title = input.title;
        todo.description = input.description;
        todo.completed = input.completed;
        Some(todo.clone())
    }

    pub fn remove(&mut self, id: i64) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }
}
