use desde::tui::dialog::DialogController;
use tokio::sync::mpsc;

// The UI wires every destructive action the same way: open a prompt, spawn
// a task that forwards the follow-up action only on a true answer.

#[tokio::test]
async fn confirmed_prompt_reaches_the_worker() {
    let mut dialog = DialogController::default();
    let (tx, mut rx) = mpsc::channel(1);

    let answer = dialog
        .confirm("Delete", "Delete this event?", "Delete", Some("Cancel"))
        .unwrap();
    let forward = tokio::spawn(async move {
        if answer.await.unwrap_or(false) {
            let _ = tx.send(3usize).await;
        }
    });

    dialog.resolve(true);
    forward.await.unwrap();
    assert_eq!(rx.recv().await, Some(3), "the delete index should arrive");
}

#[tokio::test]
async fn cancelled_prompt_forwards_nothing() {
    let mut dialog = DialogController::default();
    let (tx, mut rx) = mpsc::channel::<usize>(1);

    let answer = dialog
        .confirm("Delete", "Delete this event?", "Delete", Some("Cancel"))
        .unwrap();
    let forward = tokio::spawn(async move {
        if answer.await.unwrap_or(false) {
            let _ = tx.send(3).await;
        }
    });

    dialog.resolve(false);
    forward.await.unwrap();
    assert_eq!(rx.recv().await, None, "cancel must not produce an action");
}
