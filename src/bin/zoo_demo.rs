//! zoo-demo: walks the roster lifecycle end to end.
//!
//! Builds one of each animal and staff variant, exercises the registry
//! listings and care actions, then saves the zoo to `zoo_data.json` and
//! loads it back.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zoo_roster::{
    Animal, Staff, Veterinarian, Zoo, ZooKeeper, load_zoo_from_file, save_zoo_to_file,
};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zoo_roster=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let bird = Animal::bird("Parrot", 2, "Medium");
    let mammal = Animal::mammal("Leo", 4, "Golden");
    let reptile = Animal::reptile("Kaa", 3, "Smooth");

    println!("{}", mammal.eat());

    for animal in [&bird, &mammal, &reptile] {
        println!("{}", animal.make_sound());
    }

    let mut zoo = Zoo::new();
    zoo.add_animal(bird.clone());
    zoo.add_animal(mammal.clone());
    zoo.add_animal(reptile);
    for line in zoo.list_animals() {
        println!("{}", line);
    }

    let keeper = ZooKeeper::new("Alex");
    let vet = Veterinarian::new("Alice");
    println!("{}", keeper.feed_animal(&bird));
    println!("{}", vet.heal_animal(&mammal));

    zoo.add_staff(Staff::from(keeper));
    zoo.add_staff(Staff::from(vet));
    for line in zoo.list_staff() {
        println!("{}", line);
    }

    save_zoo_to_file(&zoo, "zoo_data.json").await?;

    let restored = load_zoo_from_file("zoo_data.json").await?;
    for line in restored.list_animals() {
        println!("{}", line);
    }
    for line in restored.list_staff() {
        println!("{}", line);
    }

    Ok(())
}
