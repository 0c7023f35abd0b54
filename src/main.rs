use anyhow::Result;
use clap::Parser;
use std::path::Path;

use release_bump::boundary::BoundaryWarning;
use release_bump::changelog::{Changelog, ChangelogEntry};
use release_bump::version::{BumpKind, Version};
use release_bump::{changelog, config, settings, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-bump",
    about = "Bump the project version and prepend a changelog entry"
)]
struct Args {
    #[arg(help = "Version component to bump: major, minor or patch (default: patch)")]
    kind: Option<String>,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load tool settings
    let settings = match settings::load_settings(args.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    };

    let kind = BumpKind::from_arg(args.kind.as_deref());

    // Load the project config and parse its version field
    let config_path = Path::new(&settings.config_path);
    let mut project = match config::load(config_path) {
        Ok(project) => project,
        Err(e) => {
            ui::display_error(&format!("Failed to read {}: {}", settings.config_path, e));
            std::process::exit(1);
        }
    };

    let current_raw = match config::version_field(&project) {
        Ok(raw) => raw.to_string(),
        Err(e) => {
            ui::display_error(&format!("{}: {}", settings.config_path, e));
            std::process::exit(1);
        }
    };

    let current = match Version::parse(&current_raw) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("{}: {}", settings.config_path, e));
            std::process::exit(1);
        }
    };

    let next = current.bump(&kind);
    ui::display_version_change(&current_raw, &next.to_string());

    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let entry = ChangelogEntry::new(next.to_string(), date);

    if args.dry_run {
        ui::display_status("Dry run mode:");
        ui::display_success(&format!(
            "  Step 1: would update {} to version {}",
            settings.config_path, next
        ));
        ui::display_success(&format!(
            "  Step 2: would add a changelog entry for {} to {}",
            next, settings.changelog_path
        ));
        ui::display_success(&format!(
            "  Step 3: would copy {} to {}",
            settings.changelog_path, settings.parent_changelog_path
        ));
        return Ok(());
    }

    // Rewrite the config in place
    config::set_version(&mut project, &next.to_string());
    if let Err(e) = config::save(config_path, &project) {
        ui::display_error(&format!("Failed to write {}: {}", settings.config_path, e));
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Version updated from {} to {}",
        current_raw, next
    ));

    // Update the changelog, seeding a default document if none exists
    let changelog_path = Path::new(&settings.changelog_path);
    let mut doc = match Changelog::load(changelog_path) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            let warning = BoundaryWarning::MissingChangelog {
                path: settings.changelog_path.clone(),
            };
            ui::display_boundary_warning(&warning);
            Changelog::seed(&settings.changelog.header, &settings.changelog.description)
        }
        Err(e) => {
            ui::display_error(&format!(
                "Failed to read {}: {}",
                settings.changelog_path, e
            ));
            std::process::exit(1);
        }
    };

    if doc.has_entry_for(&next.to_string()) {
        let warning = BoundaryWarning::DuplicateEntry {
            version: next.to_string(),
        };
        ui::display_boundary_warning(&warning);
    }

    if !doc.has_header(&settings.changelog.header) {
        let warning = BoundaryWarning::MissingHeader {
            marker: settings.changelog.header.clone(),
        };
        ui::display_boundary_warning(&warning);
    }

    doc.insert_entry(&entry, &settings.changelog.header);
    if let Err(e) = doc.save(changelog_path) {
        ui::display_error(&format!(
            "Failed to write {}: {}",
            settings.changelog_path, e
        ));
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Updated {} with version {}",
        settings.changelog_path, next
    ));

    // Duplicate the changelog to the parent directory
    let parent_path = Path::new(&settings.parent_changelog_path);
    if let Err(e) = changelog::duplicate(changelog_path, parent_path) {
        ui::display_error(&format!(
            "Failed to copy {} to {}: {}",
            settings.changelog_path, settings.parent_changelog_path, e
        ));
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Copied {} to {}",
        settings.changelog_path, settings.parent_changelog_path
    ));

    // Suggested git commands, printed but never executed
    let version_string = next.to_string();
    let commands = vec![
        format!(
            "git add {} {} {}",
            settings.config_path, settings.changelog_path, settings.parent_changelog_path
        ),
        format!(
            "git commit -m \"{}\"",
            settings
                .templates
                .commit_message
                .replace("{version}", &version_string)
        ),
        format!(
            "git tag -a {} -m \"{}\"",
            settings
                .templates
                .tag_name
                .replace("{version}", &version_string),
            settings
                .templates
                .tag_message
                .replace("{version}", &version_string)
        ),
    ];
    ui::display_git_instructions(&commands);

    Ok(())
}
