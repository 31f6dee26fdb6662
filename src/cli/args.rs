use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A line-oriented personal task and notes tracker")]
#[command(long_about = "taskpad - a line-oriented personal task and notes tracker

Reads one command per line and keeps your tasks and notes in ~/.taskpad/.

COMMANDS:
  todo <description>                          Add a plain todo
  deadline <description> /by <YYYY-MM-DD>     Add a task with a due date
  event <description> /at <free text>         Add an event
  done <n>                                    Mark task n as done
  delete <n>                                  Delete task n
  list                                        List all tasks
  find <query>                                Search task descriptions
  notes add t/<title> d/<text> p/<priority>   Add a note (priority: high|medium|low)
  notes list                                  List all notes
  notes delete <n>                            Delete note n
  bye                                         Quit

For scripting, run a single command without the prompt:
  taskpad -c 'todo buy milk'")]
#[command(version)]
pub struct Cli {
    /// Directory for state and settings (default: ~/.taskpad)
    #[arg(long, env = "TASKPAD_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Run a single command and exit instead of reading stdin
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub one_shot: Option<String>,
}
