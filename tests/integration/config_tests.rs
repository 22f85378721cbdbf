//! Configuration integration tests
//!
//! Loading a config and catalog from disk and building a server from them.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use mergington_activities::Config;
    use mergington_activities::server::builder::ServerBuilder;
    use mergington_activities::server::server::build_registry;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, TempDir};

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_catalog_file_with_legacy_and_member_entries() {
        let dir = TempDir::new().unwrap();
        let catalog = write_file(
            &dir,
            "catalog.yaml",
            r#"
activities:
  - name: Robotics
    description: Build and program robots
    schedule: Saturdays, 10:00 AM - 12:00 PM
    max_participants: 8
    participants:
      - ada@mergington.edu
      - ada@mergington.edu
      - ""
    members:
      grace@mergington.edu: [participant, organizer]
      ada@mergington.edu: [captain]
"#,
        );

        let mut config = Config::default();
        config.registry.catalog_file = Some(catalog);

        let registry = assert_ok!(build_registry(&config).await);
        let members = assert_ok!(registry.list_members("Robotics"));

        assert_eq!(members.len(), 2);
        assert_eq!(members["ada@mergington.edu"].len(), 2);
        assert!(assert_ok!(registry.get_activity("Robotics")).has_organizer());
    }

    #[tokio::test]
    async fn test_catalog_with_duplicate_names_rejected() {
        let dir = TempDir::new().unwrap();
        let catalog = write_file(
            &dir,
            "catalog.yaml",
            r#"
activities:
  - name: Robotics
    max_participants: 8
  - name: Robotics
    max_participants: 4
"#,
        );

        let mut config = Config::default();
        config.registry.catalog_file = Some(catalog);

        assert!(build_registry(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_server_from_config_file() {
        let dir = TempDir::new().unwrap();
        let catalog = write_file(
            &dir,
            "catalog.yaml",
            "activities:\n  - name: Robotics\n    max_participants: 8\n",
        );

        let mut config_file = NamedTempFile::new().unwrap();
        write!(
            config_file,
            "server:\n  host: 127.0.0.1\n  port: 8123\nregistry:\n  catalog_file: {}\n  enforce_capacity: true\n",
            catalog.display()
        )
        .unwrap();

        let config = assert_ok!(Config::from_file(config_file.path()).await);
        let server = assert_ok!(ServerBuilder::new().with_config(config).build().await);

        assert_eq!(server.config().address(), "127.0.0.1:8123");
        assert!(server.state().registry.enforces_capacity());
        assert_eq!(server.state().registry.names(), vec!["Robotics".to_string()]);
    }

    #[test]
    fn test_env_overrides_apply_on_top_of_file() {
        let config = assert_ok!(Config::from_yaml("server:\n  port: 9000\n"));
        let config = assert_ok!(config.apply_env_with(|key| match key {
            "ACTIVITIES_PORT" => Some("9100".to_string()),
            "ACTIVITIES_LOG_JSON" => Some("true".to_string()),
            _ => None,
        }));

        assert_eq!(config.server.port, 9100);
        assert!(config.logging.json);
    }

    #[test]
    fn test_shipped_config_parses() {
        let content = include_str!("../../config/activities.yaml");
        let config = assert_ok!(Config::from_yaml(content));
        assert_eq!(config.server.port, 8000);
        assert!(!config.registry.enforce_capacity);
    }

    #[tokio::test]
    async fn test_shipped_catalog_matches_builtin() {
        let mut config = Config::default();
        config.registry.catalog_file = Some(PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/catalog.yaml"
        )));

        let from_file = assert_ok!(build_registry(&config).await);
        let builtin = mergington_activities::ActivityRegistry::default();
        assert_eq!(from_file.list_activities(), builtin.list_activities());
    }
}
