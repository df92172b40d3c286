//! Seatpick entry point
//!
//! Runs the engine through a scripted session for quick eyeballing. The
//! canvas UI is the real consumer; this walks the same public surface it
//! would: hit-test, pick, auto-pick, book, purchase, wallet.

use glam::Vec2;

use seatpick::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use seatpick::hall::{
    BulkOp, Hall, PatronConstraint, SeatState, apply_bulk, auto_select_group,
    auto_select_individual, hit_test, individual_row_range, select_single,
};
use seatpick::{HallPreset, ShowInfo, Wallet};

fn main() {
    env_logger::init();

    let preset = std::env::args()
        .nth(1)
        .and_then(|arg| HallPreset::from_str(&arg))
        .unwrap_or_default();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    log::info!("Seatpick starting: {} hall, seed {}", preset.as_str(), seed);

    let mut hall = Hall::new(preset.config(), seed);
    let show = ShowInfo::default();
    let mut wallet = Wallet::new();

    println!(
        "{} hall ({}x{}): {} available, {} occupied",
        preset.as_str(),
        hall.config.rows,
        hall.config.cols,
        hall.count_by_state(SeatState::Available),
        hall.count_by_state(SeatState::Occupied),
    );

    // A click in the middle of the canvas
    let pointer = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    if let Some(seat) = hit_test(&hall, pointer) {
        let range = individual_row_range(34, hall.config.rows);
        match select_single(&mut hall, seat, range) {
            Ok(()) => println!("clicked seat {}", seat.label()),
            Err(err) => println!("clicked seat {}: {}", seat.label(), err),
        }
    }

    // Auto-pick for an adult, then buy the ticket
    match auto_select_individual(&mut hall, 34) {
        Ok(seat) => {
            println!("auto-picked {}", seat.label());
            match apply_bulk(&mut hall, BulkOp::Purchase) {
                Ok(Some(draft)) => {
                    wallet.add_draft(draft, &show.movie_name, &show.show_time);
                    if let Err(err) = wallet.pay(0) {
                        println!("payment failed: {}", err);
                    }
                }
                Ok(None) => {}
                Err(err) => println!("purchase failed: {}", err),
            }
        }
        Err(err) => println!("auto-pick failed: {}", err),
    }

    // A family of four, one child - front rows are off the table
    let members = [
        PatronConstraint::from_age(38),
        PatronConstraint::from_age(36),
        PatronConstraint::from_age(11),
        PatronConstraint::from_age(8),
    ];
    match auto_select_group(&mut hall, members.len(), &members) {
        Ok(block) => {
            let labels: Vec<String> = block.iter().map(|s| s.label()).collect();
            println!("group block: {}", labels.join(", "));
            // Hold the block, then think better of it
            if let Err(err) = apply_bulk(&mut hall, BulkOp::Book) {
                println!("booking failed: {}", err);
            } else if let Err(err) = apply_bulk(&mut hall, BulkOp::Cancel) {
                println!("cancel failed: {}", err);
            }
        }
        Err(err) => println!("group auto-pick failed: {}", err),
    }

    for event in hall.take_events() {
        log::debug!("event: {:?}", event);
    }

    wallet.sort_by_show_time();
    match wallet.to_json() {
        Ok(json) => println!("wallet ({} ticket(s)): {}", wallet.len(), json),
        Err(err) => println!("wallet serialization failed: {}", err),
    }

    println!(
        "end of session: {} available, {} occupied",
        hall.count_by_state(SeatState::Available),
        hall.count_by_state(SeatState::Occupied),
    );
}
