use inkwell_core::{CommentError, CommentThread};

#[test]
fn sample_thread_starts_with_three_comments() {
    let thread = CommentThread::with_sample_comments("2");

    assert_eq!(thread.article_id(), "2");
    assert_eq!(thread.len(), 3);
    let users = thread
        .comments()
        .iter()
        .map(|comment| comment.user.as_str())
        .collect::<Vec<_>>();
    assert_eq!(users, vec!["Dev_Pro_99", "Sarah Jenkins", "AlexM"]);
    assert_eq!(thread.comments()[0].likes, 12);
}

#[test]
fn post_prepends_guest_comment() {
    let mut thread = CommentThread::with_sample_comments("1");

    let text = "  Loved the section on brutalism.  ";
    let posted = thread.post(text).unwrap().clone();
    assert_eq!(posted.user, "Guest User");
    assert_eq!(posted.date, "Just now");
    assert_eq!(posted.likes, 0);
    assert_eq!(posted.text, text);
    assert!(posted.avatar.ends_with(&posted.id.to_string()));

    assert_eq!(thread.len(), 4);
    assert_eq!(thread.comments()[0], posted);
    assert_eq!(thread.get(posted.id), Some(&posted));
}

#[test]
fn newest_comment_is_first() {
    let mut thread = CommentThread::new("3");
    assert!(thread.is_empty());

    let first = thread.post("first").unwrap().id;
    let second = thread.post("second").unwrap().id;
    assert_ne!(first, second);

    let texts = thread
        .comments()
        .iter()
        .map(|comment| comment.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn blank_comment_is_rejected_without_changing_thread() {
    let mut thread = CommentThread::with_sample_comments("1");

    assert_eq!(thread.post("").unwrap_err(), CommentError::EmptyText);
    assert_eq!(thread.post(" \n\t ").unwrap_err(), CommentError::EmptyText);
    assert_eq!(thread.len(), 3);
}

#[test]
fn threads_are_independent_per_session() {
    let mut first = CommentThread::with_sample_comments("1");
    first.post("only here").unwrap();

    let fresh = CommentThread::with_sample_comments("1");
    assert_eq!(fresh.len(), 3);
    assert!(fresh.comments().iter().all(|c| c.text != "only here"));
}
