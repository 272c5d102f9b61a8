// Thornboard End-to-End Session Scenarios
//
// These tests simulate typing sessions the way the host keyboard service
// drives them, from settings file to committed text.
//
// Run with: cargo test --features settings --test session_scenarios

#[cfg(feature = "settings")]
mod e2e_tests {
    use std::fs;
    use std::time::{Duration, Instant};

    use thornboard_core::{KeyOutput, KeyboardSession, Layout, Settings, ShiftMode};

    // =========================================================================
    // Test Helpers
    // =========================================================================

    /// Feed codes one second apart and collect the committed text
    fn type_codes(session: &mut KeyboardSession, codes: &[i64]) -> String {
        let start = Instant::now();
        let mut text = String::new();
        for (i, &code) in codes.iter().enumerate() {
            let at = start + Duration::from_secs(i as u64);
            if let KeyOutput::Commit(committed) = session.process_key_at(code, at) {
                text.push_str(&committed);
            }
        }
        text
    }

    fn codes(s: &str) -> Vec<i64> {
        s.chars().map(|c| c as i64).collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[test]
    fn scenario_capitalized_old_english_word() {
        let mut session = KeyboardSession::default();
        let mut keys = vec![-1, 254];
        keys.extend(codes("at"));
        assert_eq!(type_codes(&mut session, &keys), "Þat");
    }

    #[test]
    fn scenario_caps_lock_sentence() {
        let mut session = KeyboardSession::default();
        let start = Instant::now();
        session.process_key_at(-1, start);
        session.process_key_at(-1, start + Duration::from_millis(150));
        assert_eq!(session.shift_mode(), ShiftMode::CapsLock);

        let mut keys = codes("é a");
        keys.push(254);
        keys.extend(codes("1!"));
        assert_eq!(type_codes(&mut session, &keys), "É AÞ1!");
        assert_eq!(session.shift_mode(), ShiftMode::CapsLock);
    }

    #[test]
    fn scenario_symbols_page_round_trip() {
        let mut session = KeyboardSession::default();
        let outputs: Vec<KeyOutput> = [-2, '#' as i64, -68, 'x' as i64]
            .into_iter()
            .map(|code| session.process_key(code))
            .collect();

        assert_eq!(
            outputs,
            vec![
                KeyOutput::LayoutChanged(Layout::Symbols),
                KeyOutput::Commit("#".to_string()),
                KeyOutput::LayoutChanged(Layout::Letters),
                KeyOutput::Commit("x".to_string()),
            ]
        );
    }

    #[test]
    fn scenario_settings_file_drives_thorn_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[keyboard]\nthorn_on_right = true\nuse_eth_instead = true\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.source_path(), Some(path.as_path()));

        let mut session = KeyboardSession::new(settings);
        assert_eq!(session.layout_resource(), "qwerty_right");
        assert_eq!(type_codes(&mut session, &[-1, 254, 254]), "Ðð");
    }

    #[test]
    fn scenario_settings_reload_switches_back_to_thorn() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[keyboard]\nuse_eth_instead = true\n").unwrap();

        let mut settings = Settings::from_file(&path).unwrap();
        assert!(settings.use_eth_instead());

        fs::write(&path, "[keyboard]\nuse_eth_instead = false\n").unwrap();
        settings.reload().unwrap();
        assert!(!settings.use_eth_instead());

        let mut session = KeyboardSession::default();
        session.apply_settings(settings);
        assert_eq!(type_codes(&mut session, &[254]), "þ");
    }

    #[test]
    fn scenario_missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_file(dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn scenario_editing_keys_do_not_commit() {
        let mut session = KeyboardSession::default();
        assert_eq!(type_codes(&mut session, &[-5, -4, -10, -10]), "");
        assert!(!session.settings_open());
    }
}
