//! Built-in command handlers.
//!
//! Every mutating handler follows the same cycle: build values from the raw
//! tokens, look the contact up, apply exactly one mutation, store the
//! directory, and return a status line. Nothing is written when the
//! mutation found nothing to change.

use super::table::{CommandSpec, Reply, Request};
use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::models::{join_phones, Directory, Record};
use tracing::info;

/// The default command set, in `help` order.
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            names: &["hello"],
            usage: "",
            description: "Greet the user.",
            handler: hello,
        },
        CommandSpec {
            names: &["add"],
            usage: "<name> <phone>...",
            description: "Add a contact, or add phone numbers to an existing one.",
            handler: add_contact,
        },
        CommandSpec {
            names: &["change"],
            usage: "<name> <old phone> <new phone>",
            description: "Replace one of a contact's phone numbers.",
            handler: change_phone,
        },
        CommandSpec {
            names: &["phone"],
            usage: "<name>",
            description: "Show a contact's phone numbers.",
            handler: show_phones,
        },
        CommandSpec {
            names: &["show all"],
            usage: "",
            description: "Show every contact.",
            handler: show_all,
        },
        CommandSpec {
            names: &["del user"],
            usage: "<name>",
            description: "Delete a contact.",
            handler: delete_contact,
        },
        CommandSpec {
            names: &["del phone"],
            usage: "<name> <phone>",
            description: "Delete one phone number from a contact.",
            handler: delete_phone,
        },
        CommandSpec {
            names: &["rename"],
            usage: "<name> <new name>",
            description: "Rename a contact, keeping its phone numbers.",
            handler: rename_contact,
        },
        CommandSpec {
            names: &["help"],
            usage: "",
            description: "Show all available commands.",
            handler: help,
        },
        CommandSpec {
            names: &["clear"],
            usage: "",
            description: "Clear the console.",
            handler: clear,
        },
        CommandSpec {
            names: &["exit", "close", "good bye"],
            usage: "",
            description: "Leave the program.",
            handler: exit,
        },
    ]
}

fn name_missing(name: &Name) -> Reply {
    Reply::Message(format!(
        "Name {} doesn't exist. If you want to add it, please type 'add <name> <phone number>'.",
        name
    ))
}

/// Positional argument `index` as a Name.
fn name_arg(args: &[&str], index: usize) -> CommandResult<Name> {
    let raw = args.get(index).ok_or(CommandError::InsufficientArguments)?;
    Ok(Name::new(*raw)?)
}

/// Positional argument `index` as a Phone.
fn phone_arg(args: &[&str], index: usize) -> CommandResult<Phone> {
    let raw = args.get(index).ok_or(CommandError::InsufficientArguments)?;
    Ok(Phone::new(*raw)?)
}

/// The record an existence check has already confirmed.
fn existing_record<'d>(directory: &'d mut Directory, name: &Name) -> CommandResult<&'d mut Record> {
    directory
        .get_mut(name.as_str())
        .ok_or_else(|| DirectoryError::NotFound(name.to_string()).into())
}

fn hello(_request: &Request<'_>) -> CommandResult<Reply> {
    Ok(Reply::Message("How can I help you?".to_string()))
}

fn add_contact(request: &Request<'_>) -> CommandResult<Reply> {
    let name = name_arg(request.args, 0)?;
    let phones = request.args[1..]
        .iter()
        .map(|raw| Phone::new(*raw))
        .collect::<Result<Vec<_>, _>>()?;
    if phones.is_empty() {
        return Err(CommandError::InsufficientArguments);
    }

    let lookup = request.context.lookup();
    let (mut directory, exists) = lookup.lookup(name.as_str())?;

    let message = if exists {
        existing_record(&mut directory, &name)?
            .add_phones(phones)
            .to_string()
    } else {
        let message = format!("User {} added successfully.", name);
        let mut record = Record::new(name, Vec::new());
        record.add_phones(phones);
        directory.add_record(record);
        message
    };

    lookup.store(&directory)?;
    info!("{}", message);
    Ok(Reply::Message(message))
}

fn change_phone(request: &Request<'_>) -> CommandResult<Reply> {
    let name = name_arg(request.args, 0)?;
    let old = phone_arg(request.args, 1)?;
    let new = phone_arg(request.args, 2)?;

    let lookup = request.context.lookup();
    let (mut directory, exists) = lookup.lookup(name.as_str())?;
    if !exists {
        return Ok(name_missing(&name));
    }

    let outcome = existing_record(&mut directory, &name)?.change_phone(&old, new);
    if !outcome.is_not_found() {
        lookup.store(&directory)?;
        info!("{}", outcome);
    }
    Ok(Reply::Message(outcome.to_string()))
}

fn show_phones(request: &Request<'_>) -> CommandResult<Reply> {
    let name = name_arg(request.args, 0)?;

    let (directory, exists) = request.context.lookup().lookup(name.as_str())?;
    if !exists {
        return Ok(name_missing(&name));
    }

    let record = directory
        .get(name.as_str())
        .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;
    let message = if record.phones().is_empty() {
        format!("User {} has no phone numbers.", name)
    } else {
        format!("Phone numbers for {}: {}.", name, join_phones(record.phones()))
    };
    Ok(Reply::Message(message))
}

fn show_all(request: &Request<'_>) -> CommandResult<Reply> {
    let directory = request.context.lookup().load_all()?;
    if directory.is_empty() {
        return Ok(Reply::Message("The contact list is empty.".to_string()));
    }

    let lines: Vec<String> = directory.records().map(ToString::to_string).collect();
    Ok(Reply::Message(lines.join("\n")))
}

fn delete_contact(request: &Request<'_>) -> CommandResult<Reply> {
    let name = name_arg(request.args, 0)?;

    let lookup = request.context.lookup();
    let (mut directory, exists) = lookup.lookup(name.as_str())?;
    if !exists {
        return Ok(Reply::Message(format!("Name {} doesn't exist.", name)));
    }

    directory.delete_record(&name)?;
    lookup.store(&directory)?;

    let message = format!("User {} deleted successfully.", name);
    info!("{}", message);
    Ok(Reply::Message(message))
}

fn delete_phone(request: &Request<'_>) -> CommandResult<Reply> {
    let name = name_arg(request.args, 0)?;
    let phone = phone_arg(request.args, 1)?;

    let lookup = request.context.lookup();
    let (mut directory, exists) = lookup.lookup(name.as_str())?;
    if !exists {
        return Ok(Reply::Message(format!("Name {} doesn't exist.", name)));
    }

    let outcome = existing_record(&mut directory, &name)?.delete_phone(&phone);
    if !outcome.is_not_found() {
        lookup.store(&directory)?;
        info!("{}", outcome);
    }
    Ok(Reply::Message(outcome.to_string()))
}

fn rename_contact(request: &Request<'_>) -> CommandResult<Reply> {
    let old = name_arg(request.args, 0)?;
    let new = name_arg(request.args, 1)?;

    let lookup = request.context.lookup();
    let (mut directory, exists) = lookup.lookup(old.as_str())?;
    if !exists {
        return Ok(Reply::Message(format!("Name {} doesn't exist.", old)));
    }
    if old != new && directory.contains(new.as_str()) {
        return Ok(Reply::Message(format!("Name {} already exists.", new)));
    }

    let message = format!("User {} renamed to {}.", old, new);
    directory.rename_record(&old, new)?;
    lookup.store(&directory)?;

    info!("{}", message);
    Ok(Reply::Message(message))
}

fn help(request: &Request<'_>) -> CommandResult<Reply> {
    Ok(Reply::Message(request.table.help_text()))
}

fn clear(_request: &Request<'_>) -> CommandResult<Reply> {
    Ok(Reply::Clear)
}

fn exit(_request: &Request<'_>) -> CommandResult<Reply> {
    Ok(Reply::Exit)
}
