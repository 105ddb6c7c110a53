#![allow(dead_code)]

use park_previewer::adapters::server;
use park_previewer::FsParkStore;
use tempfile::TempDir;

pub const WA_PARKS: [&str; 3] = ["Mount Rainier", "North Cascades", "Olympic"];

/// Writes a small States/ + Parks/ tree and returns its root.
pub fn seed_data_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let states = temp_dir.path().join("States");
    let parks = temp_dir.path().join("Parks");
    std::fs::create_dir_all(&states).unwrap();
    std::fs::create_dir_all(&parks).unwrap();

    std::fs::write(states.join("WA"), format!("{}\n", WA_PARKS.join("\n"))).unwrap();
    std::fs::write(states.join("DE"), "").unwrap();
    std::fs::write(states.join("NY"), "Statue of Liberty\n").unwrap();

    let records = [
        ("Mount Rainier", "https://images.example.org/mount-rainier.jpg", "1899"),
        ("North Cascades", "https://images.example.org/north-cascades.jpg", "1968"),
        ("Olympic", "https://images.example.org/olympic.jpg", "1938"),
        ("Statue of Liberty", "https://images.example.org/statue-of-liberty.jpg", "1924"),
    ];
    for (name, image, year) in records {
        std::fs::write(parks.join(name), format!("{}\n{}\n", image, year)).unwrap();
    }

    temp_dir
}

pub fn store_for(data_dir: &TempDir) -> FsParkStore {
    FsParkStore::new(data_dir.path().join("States"), data_dir.path().join("Parks"))
}

/// Starts the lookup service on an ephemeral port and returns its base URL.
pub async fn spawn_server(store: FsParkStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener, store).await.unwrap();
    });
    format!("http://{}/", addr)
}
