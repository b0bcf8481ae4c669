//! Account creation command template tests

use hubauth_domain::AddUserCommand;
use hubauth_domain::Error;
use hubauth_domain::value_objects::command::shell_join;

#[test]
fn test_argv_appends_username() {
    let command = AddUserCommand::linux_default();
    assert_eq!(
        command.argv_for("river"),
        vec![
            "adduser",
            "-q",
            "--gecos",
            "\"\"",
            "--disabled-password",
            "river"
        ]
    );
}

#[test]
fn test_argv_substitutes_placeholder_in_every_token() {
    let command = AddUserCommand::new([
        "adduser",
        "-q",
        "--gecos",
        "\"\"",
        "--home",
        "/customhome/USERNAME",
        "--comment=USERNAME-USERNAME",
        "--disabled-password",
    ]);

    assert_eq!(
        command.argv_for("river"),
        vec![
            "adduser",
            "-q",
            "--gecos",
            "\"\"",
            "--home",
            "/customhome/river",
            "--comment=river-river",
            "--disabled-password",
            "river",
        ]
    );
}

#[test]
fn test_empty_template_yields_username_only() {
    let command = AddUserCommand::new(Vec::<String>::new());
    assert!(command.is_empty());
    assert_eq!(command.argv_for("river"), vec!["river"]);
}

#[test]
fn test_platform_defaults() {
    assert_eq!(
        AddUserCommand::for_target_os("linux").unwrap(),
        AddUserCommand::linux_default()
    );
    assert_eq!(
        AddUserCommand::for_target_os("freebsd").unwrap(),
        AddUserCommand::new(["pw", "useradd", "-m"])
    );
}

#[test]
fn test_macos_has_no_default() {
    match AddUserCommand::for_target_os("macos") {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("macOS")),
        other => panic!("Expected configuration error, got {other:?}"),
    }
    assert!(AddUserCommand::for_target_os("windows").is_err());
}

#[test]
fn test_display_is_shell_quoted() {
    let command = AddUserCommand::linux_default();
    assert_eq!(
        command.to_string(),
        "adduser -q --gecos '\"\"' --disabled-password"
    );
}

#[test]
fn test_non_ascii_arguments_are_quoted() {
    let argv = AddUserCommand::bsd_default().argv_for("zoë");
    assert_eq!(shell_join(&argv), "pw useradd -m 'zoë'");
}
