use chrono::Utc;
use rusqlite::params;

use crate::db::connection::Database;
use crate::errors::ServerError;

const BLOCKS: [&str; 3] = ["A", "B", "C"];
const FLOORS_PER_BLOCK: u32 = 3;
const ROOMS_PER_FLOOR: u32 = 8;

/// Seeds the fixed room catalog and demo users on first start. A non-empty
/// rooms table means a previous run already seeded; nothing is touched.
pub fn seed_if_empty(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        if count > 0 {
            return Ok(());
        }

        println!("Seeding rooms and demo users...");
        let now = Utc::now().naive_utc();

        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for block in BLOCKS {
            for floor_num in 1..=FLOORS_PER_BLOCK {
                let floor = format!("Floor{floor_num}");
                for room_num in 1..=ROOMS_PER_FLOOR {
                    let room_id = format!("{block}-{floor}-R{room_num}");
                    tx.execute(
                        r#"
                        INSERT INTO rooms (id, block, floor, number, status, last_updated)
                        VALUES (?1, ?2, ?3, ?4, 'green', ?5)
                        "#,
                        params![room_id, block, floor, room_num.to_string(), now],
                    )
                    .map_err(|e| ServerError::DbError(e.to_string()))?;
                }
            }
        }

        let users = [
            ("student1", "S. Reddy", "student", Some("A-Floor1-R1")),
            ("student2", "M. Rao", "student", Some("A-Floor1-R2")),
            ("supervisor1", "Sup One", "supervisor", None),
            ("electrician1", "Elec One", "electrician", None),
        ];
        for (username, name, role, room_id) in users {
            tx.execute(
                "INSERT OR IGNORE INTO users (username, name, role, room_id) VALUES (?1, ?2, ?3, ?4)",
                params![username, name, role, room_id],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
