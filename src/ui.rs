use crate::pipeline::ReleasePlan;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_plan(plan: &ReleasePlan) {
    println!("\x1b[32m✓\x1b[0m Computed version: {}", plan.version);
    println!(
        "  Release build: {}",
        if plan.is_release { "yes" } else { "no" }
    );

    let mut channel_line = format!("  Publish channel: {} ({})", plan.channel, plan.channel_name);
    if plan.dry_run {
        channel_line.push_str(" [dry-run]");
    }
    println!("{}", channel_line);

    println!(
        "  Artifact signing: {}",
        if plan.sign { "enabled" } else { "disabled" }
    );
}
