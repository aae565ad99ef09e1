//! Basic facade usage example
//!
//! Demonstrates console routing, structured records, and child loggers.
//!
//! Run with: cargo run --example basic_usage

use console_logger_system::args;
use console_logger_system::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Console Logger System - Basic Usage Example ===\n");

    // Root logger routing raw arguments to the stdio console
    let logger = Logger::new();
    logger.set_level(LogLevel::Trace);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Child loggers carry their bindings with every call:");
    let child = logger.child(json!({"module": "auth"}))?;
    let session = child.child(json!({"session": "abc-123"}))?;
    session.info("session opened");

    println!("\n3. Structured records through a custom write function:");
    let structured = Logger::builder()
        .write_fn(|record| match record.to_json() {
            Ok(line) => println!("   {}", line),
            Err(err) => eprintln!("   serialization failed: {}", err),
        })
        .build();
    structured.info(args!["user %s logged in after %d attempts", "alice", 3]);
    structured.warn(json!({"disk_free_mb": 112}));

    println!("\n4. Raising the threshold hides lower levels:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
