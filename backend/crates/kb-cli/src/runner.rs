use crate::{
    BoardCommands, Cli, CliResult, CommandOutput, Commands, TaskCommands, WorkflowCommands, output,
};

use kb_client::HttpTaskGateway;
use kb_config::Config;
use kb_core::{
    BoardController, DropTarget, PolicyViolation, RecordingNotifier, TaskId, TaskStatus,
};

use chrono::{Local, NaiveDate};
use log::debug;

/// Execute a parsed command line against the configured server.
pub async fn run(cli: &Cli, config: &Config) -> CliResult<CommandOutput> {
    match cli.command {
        Commands::Workflow {
            action: WorkflowCommands::Check { ref from, ref to },
        } => {
            let from: TaskStatus = from.parse()?;
            let to: TaskStatus = to.parse()?;
            output::workflow_check(from, to, cli.json)
        }

        Commands::Task {
            action: TaskCommands::Get { ref id },
        } => {
            let gateway = build_gateway(cli, config)?;
            let task = gateway.get_task(&TaskId::from(id.as_str())).await?;
            output::task(&task, cli.json)
        }

        Commands::Board { ref action } => {
            let gateway = build_gateway(cli, config)?;
            match action {
                BoardCommands::Show { project_id } => {
                    let board = load_board(cli, &gateway, project_id, RecordingNotifier::new())
                        .await?;
                    output::board(project_id, &board, today(), cli.json)
                }
                BoardCommands::Move {
                    project_id,
                    task_id,
                    status,
                } => {
                    let status: TaskStatus = status.parse()?;
                    move_task(cli, &gateway, project_id, &TaskId::from(task_id.as_str()), status)
                        .await
                }
                BoardCommands::Approve {
                    project_id,
                    task_id,
                } => approve_task(cli, &gateway, project_id, &TaskId::from(task_id.as_str())).await,
            }
        }
    }
}

fn build_gateway(cli: &Cli, config: &Config) -> CliResult<HttpTaskGateway> {
    let mut api = config.api.clone();
    if let Some(ref server) = cli.server {
        api.base_url = server.clone();
    }
    if let Some(ref token) = cli.token {
        api.token = Some(token.clone());
    }

    debug!("Using server {}", api.base_url);
    Ok(HttpTaskGateway::from_config(
        &api,
        &config.retry,
        &config.cache,
    )?)
}

async fn load_board(
    cli: &Cli,
    gateway: &HttpTaskGateway,
    project_id: &str,
    notifier: RecordingNotifier,
) -> CliResult<BoardController> {
    let tasks = gateway.list_project_tasks(project_id).await?;
    debug!("Loaded board {project_id} with {} tasks", tasks.len());
    Ok(BoardController::new(tasks, cli.viewer(), notifier))
}

/// One full drag gesture: lift, hover over the column, release.
async fn move_task(
    cli: &Cli,
    gateway: &HttpTaskGateway,
    project_id: &str,
    task_id: &TaskId,
    status: TaskStatus,
) -> CliResult<CommandOutput> {
    let notifier = RecordingNotifier::new();
    let mut board = load_board(cli, gateway, project_id, notifier.clone()).await?;

    if !board.drag_start(task_id) {
        let violation = if board.task(task_id).is_none() {
            PolicyViolation::UnknownTask {
                task_id: task_id.clone(),
            }
        } else {
            PolicyViolation::NotPermitted {
                task_id: task_id.clone(),
            }
        };
        return output::refused(task_id, violation, cli.json);
    }

    let target = DropTarget::Column(status);
    board.drag_over(&target);
    let outcome = board.drop_and_persist(Some(&target), gateway).await;
    board.unmount();

    output::move_outcome(task_id, &outcome, &notifier.take(), cli.json)
}

async fn approve_task(
    cli: &Cli,
    gateway: &HttpTaskGateway,
    project_id: &str,
    task_id: &TaskId,
) -> CliResult<CommandOutput> {
    let notifier = RecordingNotifier::new();
    let mut board = load_board(cli, gateway, project_id, notifier.clone()).await?;

    let outcome = board.approve_and_persist(task_id, gateway).await;
    board.unmount();

    output::move_outcome(task_id, &outcome, &notifier.take(), cli.json)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
