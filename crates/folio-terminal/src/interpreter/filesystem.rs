//! A read-only pretend file system laid over the content store.

use super::format::file_slug;
use super::{art, Interpreter};
use folio_core::OutputLine;

const HOME: &str = "~/portfolio";

/// Directories under the root, in listing order.
const DIRECTORIES: [&str; 5] = ["about", "experience", "projects", "skills", "learning"];

/// Plain files at the root.
const ROOT_FILES: [&str; 2] = ["contact.json", "README.md"];

impl Interpreter {
    /// Entries of `dir` ("" is the root), or `None` if no such directory.
    fn directory(&self, dir: &str) -> Option<Vec<String>> {
        let c = &self.content;
        let entries = match dir {
            "" | "~" | "." => DIRECTORIES
                .iter()
                .map(|d| format!("{d}/"))
                .chain(ROOT_FILES.iter().map(|f| f.to_string()))
                .collect(),
            "about" => art::ABOUT_FILES.iter().map(|f| f.to_string()).collect(),
            "experience" => c
                .experience
                .iter()
                .map(|e| format!("{}.md", file_slug(&e.company)))
                .collect(),
            "projects" => c
                .projects
                .iter()
                .map(|p| format!("{}/", file_slug(&p.name)))
                .collect(),
            "skills" => c
                .skills
                .iter()
                .map(|g| format!("{}.json", file_slug(&g.title)))
                .collect(),
            "learning" => c
                .learning_radar
                .iter()
                .map(|t| format!("{}.md", file_slug(&t.title)))
                .collect(),
            "contact" => c
                .contact_links
                .iter()
                .map(|l| file_slug(&l.label))
                .collect(),
            _ => return None,
        };
        Some(entries)
    }

    pub(super) fn ls(&self, args: &str) -> Vec<OutputLine> {
        let dir = args.trim_end_matches('/');
        let Some(entries) = self.directory(dir) else {
            return vec![OutputLine::error(format!("ls: {args}: No such directory"))];
        };

        let heading = if matches!(dir, "" | "~" | ".") { "~/" } else { dir };
        let mut lines = vec![OutputLine::system(format!("  {heading} :"))];
        lines.extend(entries.iter().map(|entry| {
            let icon = if entry.ends_with('/') { "📁" } else { "📄" };
            OutputLine::output(format!("  {icon} {entry}"))
        }));
        lines
    }

    pub(super) fn tree(&self) -> Vec<OutputLine> {
        let mut lines = vec![OutputLine::system(format!("  {HOME}"))];
        let top_level = DIRECTORIES.len() + ROOT_FILES.len();

        for (i, dir) in DIRECTORIES.iter().enumerate() {
            let last_top = i + 1 == top_level;
            let branch = if last_top { "└── " } else { "├── " };
            let stem = if last_top { "    " } else { "│   " };
            lines.push(OutputLine::output(format!("{branch}{dir}/")));

            let children = self.directory(dir).unwrap_or_default();
            for (j, child) in children.iter().enumerate() {
                let twig = if j + 1 == children.len() { "└── " } else { "├── " };
                lines.push(OutputLine::output(format!("{stem}{twig}{child}")));
            }
        }
        for (i, file) in ROOT_FILES.iter().enumerate() {
            let last_top = DIRECTORIES.len() + i + 1 == top_level;
            let branch = if last_top { "└── " } else { "├── " };
            lines.push(OutputLine::output(format!("{branch}{file}")));
        }
        lines
    }

    pub(super) fn cat(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output(
                "Usage: cat <about|skills|projects|experience|contact|learning>",
            )];
        }

        let c = &self.content;
        let file = args.trim_end_matches(".json").trim_end_matches(".md");
        match file {
            "about" => c
                .about
                .iter()
                .map(|para| OutputLine::output(format!("  {para}")))
                .collect(),
            "skills" => c
                .skills
                .iter()
                .flat_map(|g| {
                    [
                        OutputLine::system(format!("  [{}]", g.title)),
                        OutputLine::output(format!("  {}", g.items.join(", "))),
                    ]
                })
                .collect(),
            "projects" => c
                .projects
                .iter()
                .map(|p| OutputLine::output(format!("  {} — {}", p.name, p.summary)))
                .collect(),
            "experience" => c
                .experience
                .iter()
                .map(|e| OutputLine::output(format!("  {} @ {} ({})", e.role, e.company, e.period)))
                .collect(),
            "contact" => c
                .contact_links
                .iter()
                .map(|l| OutputLine::output(format!("  {}: {}", l.label, l.href)))
                .collect(),
            "learning" => c
                .learning_radar
                .iter()
                .map(|t| OutputLine::output(format!("  {} [{}] — {}", t.title, t.cadence, t.focus)))
                .collect(),
            "readme" => vec![
                OutputLine::system(format!("  # {}", c.name)),
                OutputLine::output(format!("  {}", c.tagline)),
                OutputLine::output(format!("\n  {}", c.intro)),
            ],
            _ => vec![OutputLine::error(format!("cat: {args}: No such file"))],
        }
    }

    pub(super) fn pwd(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(format!("  {HOME}"))]
    }

    pub(super) fn cd(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(
            "  There's no escape. You're in the portfolio now. 🗂️",
        )]
    }

    pub(super) fn rm(&self) -> Vec<OutputLine> {
        vec![OutputLine::system("  rm: permission denied. Nice try though. 🔒")]
    }
}
