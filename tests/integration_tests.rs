use predicates::str::contains;

mod common;
use common::run_script;

#[test]
fn test_add_and_list() {
    run_script(
        "add_and_list",
        "add \"Morning run\" --place \"07:00, park\" --persona \"an early riser\"\nlist\nquit\n",
    )
    .success()
    .stdout(contains("Added habit 1: Morning run"))
    .stdout(contains("07:00, park"))
    .stdout(contains("an early riser"));
}

#[test]
fn test_progress_after_explicit_dates() {
    run_script(
        "progress_dates",
        "add Run\n\
         done 1 --date 2025-03-10\n\
         done 1 --date 2025-03-11\n\
         done 1 --date 2025-03-12\n\
         done 1 --date 2025-03-20\n\
         progress\n\
         quit\n",
    )
    .success()
    .stdout(contains("Total days"))
    .stdout(contains("Streak"))
    .stdout(contains("4"))
    .stdout(contains("3"));
}

#[test]
fn test_progress_json_output() {
    run_script(
        "progress_json",
        "add Run\n\
         done 1 --date 2025-03-10\n\
         done 1 --date 2025-03-11\n\
         progress --json\n\
         quit\n",
    )
    .success()
    .stdout(contains("\"title\": \"Run\""))
    .stdout(contains("\"total\": 2"))
    .stdout(contains("\"streak\": 2"));
}

#[test]
fn test_done_today_and_yesterday() {
    run_script(
        "done_today_yesterday",
        "add Run\ndone 1\ndone 1 --yesterday\nprogress\nquit\n",
    )
    .success()
    .stdout(contains("Marked habit 1 complete for"))
    .stdout(contains("2"));
}

#[test]
fn test_edit_unknown_id_is_noop() {
    run_script(
        "edit_unknown",
        "add Run\nedit 99 --title Walk\nlist\nquit\n",
    )
    .success()
    .stdout(contains("No habit with id 99, nothing to edit"))
    .stdout(contains("Run"));
}

#[test]
fn test_del_unknown_id_is_noop() {
    run_script("del_unknown", "del 7\nquit\n")
        .success()
        .stdout(contains("No habit with id 7, nothing to delete"));
}

#[test]
fn test_del_removes_habit_from_progress() {
    run_script(
        "del_removes",
        "add Run\nadd Read\ndel 1\nprogress\nquit\n",
    )
    .success()
    .stdout(contains("Deleted habit 1"))
    .stdout(contains("Read"));
}

#[test]
fn test_edit_updates_listed_title() {
    run_script(
        "edit_title",
        "add Run\nedit 1 --title \"Morning walk\"\nlist\nquit\n",
    )
    .success()
    .stdout(contains("Updated habit 1"))
    .stdout(contains("Morning walk"));
}

#[test]
fn test_empty_state_messages() {
    run_script("empty_state", "list\nprogress\nquit\n")
        .success()
        .stdout(contains("No habits yet. Use `add` to create one."))
        .stdout(contains("No habits yet."));
}

#[test]
fn test_config_print_shows_loaded_values() {
    run_script("config_print", "config --print\nquit\n")
        .success()
        .stdout(contains("greeting: Welcome"))
        .stdout(contains("splash_millis: 0"));
}

#[test]
fn test_splash_greeting_is_printed() {
    run_script("splash_greeting", "quit\n")
        .success()
        .stdout(contains("Welcome"))
        .stdout(contains("Type `help` for available commands."));
}

#[test]
fn test_state_is_gone_after_restart() {
    // First process creates a habit...
    run_script("restart_first", "add Run\nlist\nquit\n")
        .success()
        .stdout(contains("Added habit 1: Run"));

    // ...a second process starts from scratch
    run_script("restart_second", "list\nquit\n")
        .success()
        .stdout(contains("No habits yet. Use `add` to create one."));
}

#[test]
fn test_history_journal() {
    run_script(
        "history_journal",
        "add Run\ndone 1 --date 2025-03-10\ndel 1\nhistory\nquit\n",
    )
    .success()
    .stdout(contains("add (habit 1)"))
    .stdout(contains("done (habit 1)"))
    .stdout(contains("del (habit 1)"));
}
