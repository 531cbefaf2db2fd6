//! Interactive probe for the task core.
//!
//! # Responsibility
//! - Drive the core over stdin the way a view collaborator would: issue
//!   intents, observe change notifications, re-render the ordered view.
//! - Keep output deterministic for quick local sanity checks.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tidytask_core::{
    core_version, default_log_level, init_logging, ChangeObserver, TaskService, TaskStore, ViewMode,
};

/// Marks the view dirty on every store notification; the loop re-renders
/// between intents, mirroring an event-loop UI.
struct DirtyFlag {
    dirty: AtomicBool,
}

impl ChangeObserver for DirtyFlag {
    fn on_tasks_changed(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

fn render(service: &TaskService) {
    let tasks = service.ordered_tasks();
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for (index, task) in tasks.iter().enumerate() {
        let mark = if task.done { "x" } else { " " };
        println!("{index:>3} [{mark}] {}", task.title);
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title>   add a task");
    println!("  del <index>   delete the task at a display index");
    println!("  done <index>  toggle the task at a display index");
    println!("  undo / redo   step through history");
    println!("  view <normal|completed-last>");
    println!("  list          print the ordered view");
    println!("  quit          exit");
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

fn main() {
    let log_dir = std::env::temp_dir().join("tidytask-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = Arc::new(TaskStore::new());
    let service = TaskService::new(Arc::clone(&store));
    let flag = Arc::new(DirtyFlag {
        dirty: AtomicBool::new(false),
    });
    store.add_observer(flag.clone());

    println!("tidytask {}, type `help` for commands", core_version());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        let (verb, rest) = match input.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (input, ""),
        };

        match verb {
            "" => {}
            "help" => print_help(),
            "add" => service.add_task(rest),
            "del" => {
                if let Some(index) = parse_index(rest) {
                    service.delete_at(index);
                }
            }
            "done" => {
                if let Some(index) = parse_index(rest) {
                    service.toggle_at(index);
                }
            }
            "undo" => service.undo(),
            "redo" => service.redo(),
            "view" => match rest.trim() {
                "normal" => service.set_view_mode(ViewMode::Normal),
                "completed-last" => service.set_view_mode(ViewMode::CompletedLast),
                other => println!("unknown view mode `{other}`"),
            },
            "list" => render(&service),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; try `help`"),
        }

        if flag.dirty.swap(false, Ordering::SeqCst) {
            render(&service);
        }
    }
}
