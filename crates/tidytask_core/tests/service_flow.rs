use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tidytask_core::{ChangeObserver, TaskService, TaskStore, ViewMode};

fn service() -> TaskService {
    TaskService::new(Arc::new(TaskStore::new()))
}

fn view(service: &TaskService) -> Vec<(String, bool)> {
    service
        .ordered_tasks()
        .into_iter()
        .map(|t| (t.title, t.done))
        .collect()
}

#[test]
fn toggle_then_completed_last_then_undo() {
    let service = service();

    service.add_task("Buy milk");
    service.add_task("Write report");
    service.toggle_at(0);

    service.set_view_mode(ViewMode::CompletedLast);
    assert_eq!(
        view(&service),
        [
            ("Write report".to_string(), false),
            ("Buy milk".to_string(), true),
        ]
    );

    service.undo();
    assert_eq!(
        view(&service),
        [
            ("Buy milk".to_string(), false),
            ("Write report".to_string(), false),
        ]
    );
}

#[test]
fn delete_then_undo_brings_the_task_back_in_place() {
    let service = service();

    service.add_task("A");
    service.add_task("B");
    service.delete_at(0);
    assert_eq!(view(&service), [("B".to_string(), false)]);

    service.undo();
    assert_eq!(
        view(&service),
        [("A".to_string(), false), ("B".to_string(), false)]
    );
}

#[test]
fn blank_titles_never_change_size_or_history() {
    let service = service();
    service.add_task("anchor");

    service.add_task("");
    service.add_task("   ");

    assert_eq!(service.ordered_tasks().len(), 1);

    // Exactly one undo step exists: the anchor add.
    service.undo();
    assert!(service.ordered_tasks().is_empty());
    assert!(!service.can_undo());
}

#[test]
fn undo_then_new_intent_clears_redo() {
    let service = service();
    service.add_task("first");
    service.undo();
    assert!(service.can_redo());

    service.add_task("second");
    assert!(!service.can_redo());

    service.redo();
    let titles: Vec<String> = service.ordered_tasks().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["second"]);
}

#[test]
fn display_index_intents_follow_active_ordering() {
    let service = service();
    service.add_task("early");
    service.add_task("late");
    service.toggle_at(0);
    service.set_view_mode(ViewMode::CompletedLast);

    // Index 0 is now "late"; toggling it must not touch "early".
    service.toggle_at(0);

    assert_eq!(
        view(&service),
        [("early".to_string(), true), ("late".to_string(), true)]
    );
}

#[test]
fn observer_may_query_history_state_during_notification() {
    // A view refreshing its undo/redo button state calls back into the
    // facade from inside the change notification; no facade lock may still
    // be held at that point.
    struct ButtonState {
        service: Arc<TaskService>,
        saw_undo_available: AtomicBool,
        saw_redo_available: AtomicBool,
    }

    impl ChangeObserver for ButtonState {
        fn on_tasks_changed(&self) {
            if self.service.can_undo() {
                self.saw_undo_available.store(true, Ordering::SeqCst);
            }
            if self.service.can_redo() {
                self.saw_redo_available.store(true, Ordering::SeqCst);
            }
        }
    }

    let store = Arc::new(TaskStore::new());
    let service = Arc::new(TaskService::new(Arc::clone(&store)));
    let observer = Arc::new(ButtonState {
        service: Arc::clone(&service),
        saw_undo_available: AtomicBool::new(false),
        saw_redo_available: AtomicBool::new(false),
    });
    store.add_observer(observer.clone());

    service.add_task("tracked");
    service.undo();
    service.redo();

    assert!(observer.saw_undo_available.load(Ordering::SeqCst));
    assert!(observer.saw_redo_available.load(Ordering::SeqCst));
    let titles: Vec<String> = service.ordered_tasks().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["tracked"]);
}

#[test]
fn undo_survives_view_mode_changes_between_commands() {
    let service = service();
    service.add_task("one");
    service.set_view_mode(ViewMode::CompletedLast);
    service.add_task("two");

    service.undo();
    service.undo();

    assert!(service.ordered_tasks().is_empty());
    assert_eq!(service.view_mode(), ViewMode::CompletedLast);
}
