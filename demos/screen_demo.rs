//! Screen Demo: Drives the bounded event screen from a producer thread.
//!
//! Emits a JSON payload roughly every 100ms and lets the screen wipe itself
//! each time the line budget overflows. Run with `RUST_LOG=info` to see the
//! diagnostic fallback when no terminal surface is registered.

use serde_json::json;
use sideband_screen::{
    EventBus, FunctionRegistry, InvokeActor, ScreenConfig, ScreenListener, SurfaceRegistry,
    TerminalSurface, EVENT_STREAM, SCREEN_SURFACE, STARTUP_FUNCTION,
};
use std::thread;
use std::time::Duration;

fn main() -> std::io::Result<()> {
    env_logger::init();

    println!("Sideband Screen Demo");
    println!("====================");
    println!("Emitting one payload per 100ms; the screen wipes past 22 lines.\n");
    thread::sleep(Duration::from_secs(1));

    // Host side: the startup function plus the display surface.
    let mut functions = FunctionRegistry::new();
    functions.register(STARTUP_FUNCTION, || {
        log::info!("{STARTUP_FUNCTION} invoked");
    });
    let invoker = InvokeActor::spawn(functions);

    let mut registry = SurfaceRegistry::new();
    registry.register(SCREEN_SURFACE, TerminalSurface::stdout()?);

    // Front-end side: attach the screen.
    let bus = EventBus::new();
    ScreenListener::attach(&bus, &invoker, &mut registry, ScreenConfig::default())
        .expect("bus is alive");

    // Producer: emit a few budgets' worth of payloads.
    let sender = bus.sender();
    let producer = thread::spawn(move || {
        for k in 1..=60u32 {
            let payload = json!({"i": k, "source": "demo"});
            if sender.emit(EVENT_STREAM, payload).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    });

    let _ = producer.join();
    drop(bus);
    invoker.join();

    println!("\nDone.");
    Ok(())
}
