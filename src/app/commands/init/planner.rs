//! Folder layout planning.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::folder_plan::root_name;
use crate::domain::identity::answer_or_default;
use crate::domain::{AppError, FolderPlan, RecordedLayout, ScaffoldRequest};
use crate::ports::{Console, GitIdentity, SiteFilesystem};

pub(super) const OUTPUT_DIR_PROMPT: &str = "Output folder name";
pub(super) const SRC_DIR_PROMPT: &str = "Source folder name";

/// Work out the folder names for `request`.
///
/// Fails before anything is touched when the path does not name a directory.
/// On a first run the user may rename the output and source folders; once a
/// configuration document exists its recorded layout is used and only flags
/// override it.
pub fn plan<F, G, C>(
    ctx: &AppContext<F, G, C>,
    request: &ScaffoldRequest,
) -> Result<FolderPlan, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let root_name = root_name(&request.path, ctx.working_dir())
        .ok_or_else(|| AppError::InvalidRootName(request.path.display().to_string()))?;

    let defaults = ctx.defaults();
    let config_path = request.path.join(&defaults.config_file);
    let first_run = !ctx.fs().exists(&config_path);

    let (output_default, src_default) = if first_run {
        (defaults.output_dir.clone(), defaults.src_dir.clone())
    } else {
        recorded_layout(ctx, &config_path)
    };

    let output_dir_name =
        folder_name(ctx, request.output_dir_flag(), output_default, first_run, OUTPUT_DIR_PROMPT)?;
    let src_dir_name =
        folder_name(ctx, request.src_dir_flag(), src_default, first_run, SRC_DIR_PROMPT)?;

    let plan = FolderPlan {
        root_name,
        output_dir_name,
        src_dir_name,
        templates_dir_name: defaults.templates_dir.clone(),
        assets_dir_name: defaults.assets_dir.clone(),
    };
    tracing::debug!(?plan, first_run, "planned folder layout");
    Ok(plan)
}

fn folder_name<F, G, C>(
    ctx: &AppContext<F, G, C>,
    flag: Option<&str>,
    default: String,
    ask: bool,
    message: &str,
) -> Result<String, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    if !ask {
        return Ok(default);
    }
    let answer = ctx.console().input(message, &default)?;
    Ok(answer_or_default(&answer, &default))
}

fn recorded_layout<F, G, C>(ctx: &AppContext<F, G, C>, config_path: &Path) -> (String, String)
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let defaults = ctx.defaults();
    let layout = match ctx.fs().read_text(config_path).map(|text| RecordedLayout::parse(&text)) {
        Ok(Ok(layout)) => layout,
        Ok(Err(err)) => {
            tracing::warn!(%err, path = %config_path.display(), "unparseable config document");
            ctx.console().warn(&format!(
                "Could not parse {}: {}. Using default folder names.",
                config_path.display(),
                err
            ));
            RecordedLayout::default()
        }
        Err(err) => {
            tracing::warn!(%err, path = %config_path.display(), "unreadable config document");
            ctx.console().warn(&format!(
                "Could not read {}: {}. Using default folder names.",
                config_path.display(),
                err
            ));
            RecordedLayout::default()
        }
    };

    let pick = |recorded: Option<String>, fallback: &str| {
        recorded.filter(|name| !name.trim().is_empty()).unwrap_or_else(|| fallback.to_string())
    };
    let output = pick(layout.output_folder, &defaults.output_dir);
    let src = pick(layout.source_folder, &defaults.src_dir);
    (output, src)
}
