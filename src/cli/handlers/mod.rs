use std::error::Error;

use crate::api::client::{HttpTaskApi, TaskApi};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::task::Status;
use crate::model::view::{StatusFilter, ViewState};
use crate::ops::projection;
use crate::store::{StoreError, TaskPatch, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let config = config_io::load_config(cli.config.as_deref(), cli.api_url.as_deref())?;
    let Some(cmd) = cli.command else {
        // No subcommand launches the TUI; main routes that before dispatch
        return Ok(());
    };

    let api = HttpTaskApi::from_config(&config.api);
    let base_url = api.base_url().to_string();
    let mut store = TaskStore::new(api);

    match cmd {
        Commands::List(args) => cmd_list(&mut store, args, json),
        Commands::Show(args) => cmd_show(&mut store, args.id, json),
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::Status(args) => {
            let status = Status::parse_arg(&args.status)?;
            cmd_set_status(&mut store, args.id, status, json)
        }
        Commands::Start(args) => cmd_set_status(&mut store, args.id, Status::InProgress, json),
        Commands::Done(args) => cmd_set_status(&mut store, args.id, Status::Done, json),
        Commands::Edit(args) => cmd_edit(&mut store, args, json),
        Commands::Delete(args) => cmd_delete(&mut store, args.id, json),
        Commands::Check => cmd_check(&mut store, &base_url, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list<A: TaskApi>(
    store: &mut TaskStore<A>,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut view = ViewState::default();
    if let Some(status) = &args.status {
        view.filter = StatusFilter::Only(Status::parse_arg(status)?);
    }
    if let Some(search) = args.search {
        view.search = search;
    }
    view.sort = parse_sort_key(&args.sort)?;

    store.load()?;
    let tasks = projection::derive(store.tasks(), &view);

    if json {
        let out = TaskListJson {
            tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for task in &tasks {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_show<A: TaskApi>(
    store: &mut TaskStore<A>,
    id: u64,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    store.load()?;
    let task = store.get(id).ok_or(StoreError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
    } else {
        for line in format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_check<A: TaskApi>(
    store: &mut TaskStore<A>,
    base_url: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    store.load()?;
    let count = store.tasks().len();

    if json {
        let out = CheckJson {
            base_url: base_url.to_string(),
            tasks: count,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("ok: {} ({} tasks)", base_url, count);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add<A: TaskApi>(
    store: &mut TaskStore<A>,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let status = match &args.status {
        Some(s) => Status::parse_arg(s)?,
        None => Status::Open,
    };
    let created = store.create(&args.title, args.desc.as_deref(), status)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(&created))?);
    } else {
        println!("added {}", format_task_line(&created));
    }
    Ok(())
}

fn cmd_set_status<A: TaskApi>(
    store: &mut TaskStore<A>,
    id: u64,
    status: Status,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    store.load()?;
    let updated = store.update(id, &TaskPatch::status(status))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(&updated))?);
    } else {
        println!("#{} ist jetzt {}", updated.id, updated.status.label());
    }
    Ok(())
}

fn cmd_edit<A: TaskApi>(
    store: &mut TaskStore<A>,
    args: EditArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let patch = TaskPatch {
        title: args.title,
        description: args.desc,
        status: args.status.as_deref().map(Status::parse_arg).transpose()?,
    };
    if patch.title.is_none() && patch.description.is_none() && patch.status.is_none() {
        return Err("nothing to edit: pass --title, --desc or --status".into());
    }

    store.load()?;
    let updated = store.update(args.id, &patch)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(&updated))?);
    } else {
        println!("updated {}", format_task_line(&updated));
    }
    Ok(())
}

fn cmd_delete<A: TaskApi>(
    store: &mut TaskStore<A>,
    id: u64,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    store.load()?;
    store.delete(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&DeletedJson { deleted: id })?);
    } else {
        println!("deleted #{}", id);
    }
    Ok(())
}
