//! Styled console replies for CLI commands.

use afrihub::present::PaperCard;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for an item in the middle of a list
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last item of a list
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Something a command wants to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// One paper in full
  Paper(&'a Paper),
  /// A list of papers, summarized
  Papers(&'a [Paper]),
  /// Catalog statistics
  Stats(&'a StatsSnapshot),
  /// The outcome of a scraper run
  Scrape(&'a ScrapeReport),
  /// Why a submission was rejected
  Issues(&'a [ValidationIssue]),
  /// An operation completed
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// Something the user should notice but that did not fail
  Warning(&'a str),
  /// An operation failed
  Error(&'a HubdError),
}

/// Where command output goes.
pub trait UserInteraction {
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Replies on stdout/stderr with `console` styling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Terminal {
  /// Prints every field of `paper`.
  fn paper_details(paper: &Paper) {
    let card = PaperCard::from(paper);
    println!("{} {}", style(&paper.id).dim(), style(&paper.title).white().bold());
    println!("   {} {}", style("Authors:").green().bold(), card.authors);
    println!("   {} {}", style("Institution:").green().bold(), paper.institution);
    println!("   {} {}", style("Country:").green().bold(), paper.country);
    println!("   {} {}", style("Published:").green().bold(), card.published);
    if !paper.keywords.is_empty() {
      println!("   {} {}", style("Keywords:").green().bold(), paper.keywords.join(", "));
    }
    println!("   {} {}", style("Abstract:").green().bold(), paper.abstract_text);
    if let Some(url) = &card.paper_url {
      println!("   {} {}", style("URL:").green().bold(), style(url).blue().underlined());
    }
  }
}

impl UserInteraction for Terminal {
  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Paper(paper) => Self::paper_details(paper),
      ResponseContent::Papers(papers) => {
        if papers.is_empty() {
          println!("{} No research papers found", style(INFO_PREFIX).yellow());
          return Ok(());
        }
        println!("{} Found {} paper(s)", style(SUCCESS_PREFIX).green(), style(papers.len()).yellow());
        for (index, paper) in papers.iter().enumerate() {
          let prefix = if index + 1 == papers.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          println!(
            "{} {} {} {}",
            style(prefix).dim(),
            style(&paper.id).dim(),
            style(&paper.title).white().bold(),
            style(format!("({})", paper.country)).cyan()
          );
        }
      },
      ResponseContent::Stats(stats) => {
        println!("{} Research statistics", style(INFO_PREFIX).cyan());
        println!("   {} {}", style("Total Papers:").green().bold(), stats.total_papers);
        println!("   {} {}", style("Institutions:").green().bold(), stats.total_institutions);
        println!("   {} {}", style("Countries:").green().bold(), stats.total_countries);
        println!("   {}", style("Top Countries:").green().bold());
        for entry in &stats.top_countries {
          println!("     {} {} papers", style(&entry.country).white(), entry.count);
        }
        println!("   {}", style("Top Research Topics:").green().bold());
        for entry in &stats.top_keywords {
          println!("     {} {} papers", style(&entry.keyword).white(), entry.count);
        }
      },
      ResponseContent::Scrape(report) => println!(
        "{} Scraper completed successfully. Found {} papers.",
        style(SUCCESS_PREFIX).green(),
        style(report.papers_scraped).yellow()
      ),
      ResponseContent::Issues(issues) => {
        eprintln!("{} Paper rejected:", style(ERROR_PREFIX).red());
        for issue in issues {
          eprintln!("   {} {}", style(ITEM_PREFIX).dim(), style(issue).red());
        }
      },
      ResponseContent::Success(message) => println!("{} {}", style(SUCCESS_PREFIX).green(), message),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).cyan(), message),
      ResponseContent::Warning(message) => {
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow())
      },
      ResponseContent::Error(error) => eprintln!("{} {}", style(ERROR_PREFIX).red(), error),
    }
    Ok(())
  }
}
