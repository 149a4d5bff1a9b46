//! Fixed text blocks: ASCII art, fortunes and the stack sheet.

pub const BANNER: &str = "
 ██████╗██╗  ██╗ █████╗ ███╗   ██╗
██╔════╝██║  ██║██╔══██╗████╗  ██║
██║     ███████║███████║██╔██╗ ██║
██║     ██╔══██║██╔══██║██║╚██╗██║
╚██████╗██║  ██║██║  ██║██║ ╚████║
 ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝";

pub const COFFEE: &str = r"
    ( (
     ) )
  .........
  |       |]
  \       /
   `-----'";

pub const FORTUNES: &[&str] = &[
    "The best way to predict the future is to build it.",
    "AI is the new electricity. — Andrew Ng",
    "Talk is cheap. Show me the code. — Linus Torvalds",
    "First, solve the problem. Then, write the code.",
    "Simplicity is the soul of efficiency.",
    "The only way to do great work is to love what you do.",
    "Ship it. Fix it. Ship it again.",
    "In the middle of difficulty lies opportunity. — Einstein",
    "Make it work, make it right, make it fast.",
    "The best error message is the one that never shows up.",
    "An AI model is only as good as the data you feed it.",
    "Debug the process, not just the code.",
];

/// Heading and rows of the `stack` sheet.
pub const STACK: &[(&str, &[&str])] = &[
    (
        "AI / ML",
        &[
            "Python · PyTorch · TensorFlow · Scikit-learn",
            "NLP · LLMs · RAG · Prompt Engineering",
        ],
    ),
    (
        "GenAI",
        &[
            "OpenRouter · DeepSeek · LangChain · Pydantic",
            "Vector Stores · Multi-Agent Orchestration",
        ],
    ),
    (
        "Frontend",
        &[
            "Next.js · React · TypeScript · Tailwind CSS",
            "Framer Motion · Three.js · Angular · Flutter",
        ],
    ),
    ("Backend", &["Node.js · Express · REST APIs · GraphQL"]),
    (
        "Infra",
        &["Docker · AWS · Firebase · Vercel", "MongoDB · MySQL · Linux · Git"],
    ),
];

/// Label and value rows of the simulated `weather` report.
pub const WEATHER: &[(&str, &str)] = &[
    ("Condition", "⛅ Partly cloudy"),
    ("Temperature", "26°C (feels like 28°C)"),
    ("Wind", "12 km/h NE"),
    ("Humidity", "62%"),
    ("UV Index", "Moderate"),
];

/// Fixed files under `about/`.
pub const ABOUT_FILES: &[&str] = &["background.md", "philosophy.md", "goals.md"];
