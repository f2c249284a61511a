//! Archive round-trip and failure-mode tests

use tempfile::TempDir;
use zoo_roster::{
    Animal, AnimalKind, FileSystemStorageBackend, Staff, StorageError, Veterinarian, Zoo,
    ZooKeeper, ZooLoader, ZooSaver, load_zoo_from_file, save_zoo_to_file,
};

fn sample_zoo() -> Zoo {
    let mut zoo = Zoo::new();
    zoo.add_animal(Animal::bird("Parrot", 2, "Medium"));
    zoo.add_animal(Animal::mammal("Leo", 4, "Golden"));
    zoo.add_animal(Animal::reptile("Kaa", 3, "Smooth"));
    zoo.add_staff(Staff::from(ZooKeeper::new("Alex")));
    zoo.add_staff(Staff::from(Veterinarian::new("Alice")));
    zoo
}

mod round_trip_tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_preserves_listings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");
        let zoo = sample_zoo();

        save_zoo_to_file(&zoo, &path).await.unwrap();
        let restored = load_zoo_from_file(&path).await.unwrap();

        assert_eq!(restored.list_animals(), zoo.list_animals());
        assert_eq!(restored.list_staff(), zoo.list_staff());
        assert_eq!(restored, zoo);
    }

    #[tokio::test]
    async fn test_round_trip_preserves_variant_identity() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");

        save_zoo_to_file(&sample_zoo(), &path).await.unwrap();
        let restored = load_zoo_from_file(&path).await.unwrap();

        match &restored.animals[0].kind {
            AnimalKind::Bird { wing_span } => assert_eq!(wing_span, "Medium"),
            other => panic!("expected a bird back, got {:?}", other),
        }
        assert!(matches!(
            restored.animals[1].kind,
            AnimalKind::Mammal { .. }
        ));
        assert!(matches!(
            restored.animals[2].kind,
            AnimalKind::Reptile { .. }
        ));
        assert!(matches!(restored.staff[0], Staff::ZooKeeper(_)));
        assert!(matches!(restored.staff[1], Staff::Veterinarian(_)));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_archive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");

        let mut first = Zoo::new();
        first.add_animal(Animal::bird("Parrot", 2, "Medium"));
        save_zoo_to_file(&first, &path).await.unwrap();

        let second = sample_zoo();
        save_zoo_to_file(&second, &path).await.unwrap();

        let restored = load_zoo_from_file(&path).await.unwrap();
        assert_eq!(restored, second);
    }

    #[tokio::test]
    async fn test_saver_and_loader_share_a_backend() {
        let temp = TempDir::new().unwrap();
        let zoo = sample_zoo();

        ZooSaver::new(FileSystemStorageBackend::new(temp.path()))
            .save_zoo("roster.json", &zoo)
            .await
            .unwrap();
        let restored = ZooLoader::new(FileSystemStorageBackend::new(temp.path()))
            .load_zoo("roster.json")
            .await
            .unwrap();

        assert_eq!(restored, zoo);
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_archive_is_not_found() {
        let temp = TempDir::new().unwrap();

        let result = load_zoo_from_file(temp.path().join("absent.json")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");
        std::fs::write(&path, b"definitely not an archive").unwrap();

        let result = load_zoo_from_file(&path).await;
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_valid_json_with_wrong_shape_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");
        std::fs::write(&path, br#"{"hello": "world"}"#).unwrap();

        let result = load_zoo_from_file(&path).await;
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_unknown_version_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zoo_data.json");
        std::fs::write(
            &path,
            br#"{"version":99,"saved_at":"2026-01-01T00:00:00Z","zoo":{"animals":[],"staff":[]}}"#,
        )
        .unwrap();

        match load_zoo_from_file(&path).await {
            Err(StorageError::Corrupt(reason)) => assert!(reason.contains("version")),
            other => panic!("expected Corrupt, got {:?}", other),
        }
    }
}
