use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        logging: LoggingOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_are_applied() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:3000");
    assert_eq!(settings.server.graceful_shutdown, Duration::from_secs(30));
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.site, SiteSettings::default());
    assert_eq!(settings.site.contact_email, "webmaster@gusdb.org");
    assert_eq!(settings.build.out_dir, PathBuf::from("public"));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("port 0 must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "server.port",
            ..
        }
    ));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("loud".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        logging: LoggingOverrides {
            log_json: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn navigation_hrefs_are_validated() {
    let mut raw = RawSettings::default();
    raw.site.navigation = Some(vec![
        NavigationSetting {
            label: "About".to_string(),
            href: "/about.html".to_string(),
        },
        NavigationSetting {
            label: "GMOD".to_string(),
            href: "http://www.gmod.org/".to_string(),
        },
    ]);
    let settings = Settings::from_raw(raw.clone()).expect("valid navigation");
    assert_eq!(settings.site.navigation.len(), 2);

    raw.site.navigation = Some(vec![NavigationSetting {
        label: "Bad".to_string(),
        href: "javascript:alert(1)".to_string(),
    }]);
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn contact_email_must_look_like_an_address() {
    let mut raw = RawSettings::default();
    raw.site.contact_email = Some("webmaster".to_string());
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn build_out_dir_can_be_overridden_via_cli() {
    let mut raw = RawSettings::default();
    let args = BuildArgs {
        out_dir: Some(PathBuf::from("/tmp/gus-site")),
        ..Default::default()
    };

    raw.apply_build_overrides(&args);
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.build.out_dir, PathBuf::from("/tmp/gus-site"));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["gusweb"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from(["gusweb", "render", "--output", "/tmp/about.html"]);

    match args.command.expect("render command") {
        Command::Render(render) => {
            assert_eq!(render.slug, "about");
            assert_eq!(
                render.output.as_deref(),
                Some(std::path::Path::new("/tmp/about.html"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "gusweb",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--server-port",
        "8080",
        "--log-json",
        "true",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(serve.overrides.server_port, Some(8080));
            assert_eq!(serve.overrides.logging.log_json, Some(true));
        }
        _ => panic!("wrong command parsed"),
    }
}
