use figment::Jail;
use kar_config::KarConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("KARKHANA_API__BASE_URL", "https://erp.example.in");
        jail.set_env("KARKHANA_GENERAL__DEFAULT_LIMIT", "50");
        jail.set_env("KARKHANA_SESSION__USE_KEYRING", "false");

        let config = KarConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://erp.example.in");
        assert_eq!(config.general.default_limit, 50);
        assert!(!config.session.use_keyring);
        Ok(())
    });
}

#[test]
fn dotenv_file_is_applied_before_env_provider() {
    Jail::expect_with(|jail| {
        // dotenvy writes to the process environment and Jail cannot restore
        // it, so this key is not asserted anywhere else in this binary.
        jail.create_file(".env", "KARKHANA_API__USER_AGENT=kar-test/1\n")?;
        let path = jail.directory().join(".env");

        let config = KarConfig::load_with_dotenv_file(&path).expect("config loads");
        assert_eq!(config.api.user_agent, "kar-test/1");
        Ok(())
    });
}
