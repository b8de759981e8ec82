use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::New => commands::worksheet::new(ctx, flags),
        Commands::List(args) => commands::worksheet::list(&args, ctx, flags),
        Commands::Show { id } => commands::worksheet::show(&id, ctx, flags),
        Commands::Resume { id } => commands::worksheet::resume(&id, ctx, flags),
        Commands::Delete { id } => commands::worksheet::delete(&id, ctx, flags),
        Commands::Entry { action } => commands::entry::handle(&action, ctx, flags),
        Commands::Sentence { action } => commands::sentence::handle(&action, ctx, flags),
        Commands::Inquiry { action } => commands::inquiry::handle(&action, ctx, flags),
        Commands::Turnaround { action } => commands::turnaround::handle(&action, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jyn_config::{JynConfig, StoreConfig};
    use jyn_core::enums::WorksheetStatus;
    use jyn_store::WorksheetStore;
    use tempfile::TempDir;

    use super::dispatch;
    use crate::cli::Cli;
    use crate::context::AppContext;

    fn context(dir: &TempDir) -> AppContext {
        let config = JynConfig {
            store: StoreConfig {
                path: dir.path().join("worksheets.json").display().to_string(),
            },
            ..Default::default()
        };
        AppContext::init(config).expect("context should init")
    }

    fn run(ctx: &mut AppContext, args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(std::iter::once("jyn").chain(args.iter().copied()))
            .expect("cli should parse");
        let flags = cli.global_flags();
        dispatch(cli.command, ctx, &flags)
    }

    #[test]
    fn new_worksheet_is_written_to_the_store_file() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut ctx = context(&dir);
        run(&mut ctx, &["--format", "raw", "new"]).expect("new should succeed");

        let all = ctx.service.store().list_all().expect("store should read");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status(), WorksheetStatus::InProgress);
        assert!(dir.path().join("worksheets.json").exists());
    }

    #[test]
    fn walks_a_worksheet_to_completion() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut ctx = context(&dir);
        run(&mut ctx, &["new"]).expect("new should succeed");
        let id = ctx.service.store().list_all().expect("read")[0].id().to_string();

        run(&mut ctx, &["entry", "set", &id, "--question", "1", "Paul"]).expect("entry");
        run(&mut ctx, &["sentence", "custom", &id, "Paul should listen"]).expect("custom");
        let worksheet = ctx.service.load(&id).expect("load");
        let sid = worksheet.sentences()[0].id().to_string();

        run(&mut ctx, &["inquiry", "no", &id, &sid]).expect("no");
        run(&mut ctx, &["inquiry", "answer", &id, &sid, "--index", "2", "tense"]).expect("q3");
        run(&mut ctx, &["inquiry", "answer", &id, &sid, "--index", "3", "calm"]).expect("q4");
        run(&mut ctx, &["turnaround", "done", &id, &sid]).expect("done");

        assert_eq!(
            ctx.service.load(&id).expect("load").status(),
            WorksheetStatus::Completed
        );
    }

    #[test]
    fn unknown_worksheet_is_an_error() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut ctx = context(&dir);
        assert!(run(&mut ctx, &["resume", "wks-00000000"]).is_err());
        assert!(run(&mut ctx, &["turnaround", "add", "wks-0", "snt-0", "--type", "up"]).is_err());
    }
}
