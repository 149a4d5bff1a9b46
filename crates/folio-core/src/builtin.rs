//! The portfolio content compiled into the binary.

use crate::content::{
    ContactLink, ExperienceItem, Hud, LearningTopic, NavItem, ProjectItem, SectionArt,
    SiteContent, SkillGroup,
};
use crate::section::SectionId;
use crate::theme::{AmbientPulse, MotionTokens, RevealMotion, ThemeId, ThemeTokens};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static SITE: Lazy<SiteContent> = Lazy::new(build);

/// The built-in content, constructed on first use.
pub fn site() -> &'static SiteContent {
    &SITE
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn art(src: &str, alt: &str, overlay_strength: f64, focal: &str, mobile: &str) -> SectionArt {
    SectionArt {
        src: src.to_string(),
        alt: alt.to_string(),
        overlay_strength,
        focal_position: focal.to_string(),
        mobile_focal_position: Some(mobile.to_string()),
    }
}

fn link(label: &str, href: &str) -> ContactLink {
    ContactLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn build() -> SiteContent {
    let nav = [
        (SectionId::Home, "Command Deck"),
        (SectionId::About, "Surface Brief"),
        (SectionId::Experience, "Descent Log"),
        (SectionId::Projects, "Excavation Proof"),
        (SectionId::Skills, "Tool Matrix"),
        (SectionId::Learning, "Signal Radar"),
        (SectionId::Contact, "Uplink Contact"),
    ]
    .into_iter()
    .map(|(id, label)| NavItem {
        id,
        label: label.to_string(),
    })
    .collect();

    let section_art = BTreeMap::from([
        (
            SectionId::Home,
            art(
                "/theme/dome/hero-command-deck.png",
                "Subterranean command deck atmosphere with mining station silhouettes.",
                0.62,
                "50% center",
                "52% center",
            ),
        ),
        (
            SectionId::About,
            art(
                "/theme/dome/surface-brief.png",
                "Rocky outpost above a cavern entrance at dusk.",
                0.44,
                "52% 44%",
                "58% 36%",
            ),
        ),
        (
            SectionId::Experience,
            art(
                "/theme/dome/descent-log.png",
                "Vertical cave shaft descent with layered strata and rail silhouettes.",
                0.42,
                "center center",
                "50% center",
            ),
        ),
        (
            SectionId::Projects,
            art(
                "/theme/dome/excavation-proof.png",
                "Mining chamber with modular stations and extracted fragments.",
                0.36,
                "center center",
                "50% center",
            ),
        ),
        (
            SectionId::Skills,
            art(
                "/theme/dome/tool-matrix.png",
                "Compact equipment bay wall with sockets and utility racks.",
                0.46,
                "center center",
                "50% center",
            ),
        ),
        (
            SectionId::Learning,
            art(
                "/theme/dome/signal-radar.png",
                "Dark tactical room ambiance with circular radar motifs.",
                0.50,
                "center center",
                "50% center",
            ),
        ),
        (
            SectionId::Contact,
            art(
                "/theme/dome/uplink-contact.png",
                "Extraction uplink terminal platform with beacon-like glow.",
                0.38,
                "center center",
                "50% center",
            ),
        ),
    ]);

    SiteContent {
        name: "Chandan Satwani".to_string(),
        title: "AI Engineer & Data Scientist | GenAI · MLOps".to_string(),
        tagline: "Turning research papers into playable AI experiences — shipped from Chandan AI Labs.".to_string(),
        intro: "I build interactive apps that make Generative AI tangible: gamified RAG pipelines, neuron-level model visualizers, and live multi-agent races — all deployed and open-source.".to_string(),
        profile_statement: "8+ live AI demos, each converting a complex concept into something you can see, play, and understand.".to_string(),
        hero_highlights: strings(&[
            "GenAI & LLM Applications",
            "MLOps & Deployment Pipelines",
            "Interactive AI Education",
        ]),
        availability: "AI Engineer at Allegion India — open to collaborations and GenAI consulting.".to_string(),
        email: "chandansatwani@gmail.com".to_string(),
        location: "Bangalore, India".to_string(),
        lab: "Chandan AI Labs".to_string(),
        nav,
        section_order: SectionId::ALL.to_vec(),
        section_art,
        hud: Hud {
            mission_label: "Mission: Build, Learn, Ship".to_string(),
            nav_style: "hud".to_string(),
        },
        about: strings(&[
            "ML engineer from Bangalore building at Chandan AI Labs — my one-person research-to-product studio. Every project starts with a paper or framework I want to deeply understand, and ends as a deployed, interactive experience.",
            "My approach: take dense AI concepts — RAG orchestration, mechanistic interpretability, confident adaptive decoding — and turn them into gamified Next.js apps powered by live LLM APIs (OpenRouter, DeepSeek). If you can play it, you understand it.",
            "Before going all-in on AI, I shipped full-stack products across Angular, Flutter, Node.js, and AWS. That engineering foundation now fuels faster, more reliable AI prototyping — from idea to Vercel deployment in days, not months.",
        ]),
        experience: vec![
            ExperienceItem {
                role: "AI Engineer / Data Scientist".to_string(),
                company: "Allegion India".to_string(),
                period: "2024 — Present".to_string(),
                highlights: strings(&[
                    "Building and deploying AI/ML solutions for enterprise security and access-control systems.",
                    "Applying data science and GenAI techniques to improve product intelligence and operational workflows.",
                ]),
            },
            ExperienceItem {
                role: "Founder & AI Builder".to_string(),
                company: "Chandan AI Labs (Side Projects)".to_string(),
                period: "2025 — Present".to_string(),
                highlights: strings(&[
                    "Shipped 8+ interactive AI demos — each turns a research paper into a playable, deployed experience.",
                    "Built gamified learning tools (Agentic RAG Arcade, Pydantic Quest) with mission-based XP systems and live LLM mentoring via OpenRouter/DeepSeek.",
                    "Created neuron-level model visualizers (DragonHatchling, CALM) and multi-agent orchestration races (Async Think).",
                ]),
            },
        ],
        skills: vec![
            SkillGroup {
                title: "AI / ML Core".to_string(),
                items: strings(&["Python", "PyTorch", "TensorFlow", "Scikit-learn", "NLP", "LLMs", "RAG", "Prompt Engineering"]),
            },
            SkillGroup {
                title: "GenAI Tooling".to_string(),
                items: strings(&["OpenRouter", "DeepSeek", "LangChain", "Pydantic", "Vector Stores", "Multi-Agent Orchestration"]),
            },
            SkillGroup {
                title: "Web & Full-Stack".to_string(),
                items: strings(&["Next.js", "TypeScript", "React", "Tailwind CSS", "Node.js", "Express", "Angular", "Flutter"]),
            },
            SkillGroup {
                title: "Infra & Data".to_string(),
                items: strings(&["Docker", "AWS", "Firebase", "MongoDB", "MySQL", "Linux", "Git", "Vercel"]),
            },
        ],
        projects: vec![
            ProjectItem {
                name: "Agentic RAG Arcade".to_string(),
                summary: "Gamified walkthrough of a full RAG pipeline — mission-based learning with XP, vector store simulation, and live LLM mentoring.".to_string(),
                problem: "RAG pipelines are abstract and hard to learn without seeing each stage in action — chunking, embedding, retrieval, generation.".to_string(),
                decisions: strings(&[
                    "Designed a mission-based XP system where each stage (chunk → embed → retrieve → generate) is a playable level.",
                    "Built a mock vector store with visual similarity search so learners see retrieval mechanics.",
                    "Integrated DeepSeek via OpenRouter as a stage-by-stage mentor that coaches through each RAG phase.",
                ]),
                outcome: "A fully playable educational tool live on Vercel — students interact with every RAG component instead of just reading about it.".to_string(),
                stack: strings(&["Next.js 14", "TypeScript", "OpenRouter", "DeepSeek", "Tailwind CSS", "Vercel"]),
                repo_url: "https://github.com/Chandan062311/Agentic_rag".to_string(),
                live_url: Some("https://agentic-rag-csailabs.vercel.app".to_string()),
            },
            ProjectItem {
                name: "DragonHatchling — Synapse Monitor".to_string(),
                summary: "Interactive visualizer comparing dense polysemantic transformers with sparse monosemantic 'Baby Dragon Hatchling' neurons.".to_string(),
                problem: "Mechanistic interpretability is opaque — there's no intuitive way to see how superposition works inside transformer neurons.".to_string(),
                decisions: strings(&[
                    "Built a neuron activation grid with polysemantic heatmaps showing how single neurons fire for multiple unrelated concepts.",
                    "Added concept flash cards and LLM-driven scenario battles to make the BDH sparse-model theory tangible.",
                    "Animated activation patterns side-by-side: dense (confused) vs. monosemantic (clean, interpretable).",
                ]),
                outcome: "An interactive simulator that makes the superposition problem visible and demonstrates why monosemantic neurons matter for AI safety.".to_string(),
                stack: strings(&["Next.js 14", "TypeScript", "Framer Motion", "Tailwind CSS", "Vercel"]),
                repo_url: "https://github.com/Chandan062311/DragonHatchling".to_string(),
                live_url: Some("https://dragon-hatchling-csailabs.vercel.app".to_string()),
            },
            ProjectItem {
                name: "Async Think".to_string(),
                summary: "Live race visualization of 3 multi-agent LLM orchestration strategies — Sequential, Parallel, and AsyncThink.".to_string(),
                problem: "Comparing sequential, parallel, and async LLM coordination is impossible without side-by-side timing and token-level visibility.".to_string(),
                decisions: strings(&[
                    "Races 3 concurrent DeepSeek workers in real-time with animated progress bars and token streaming.",
                    "Measures and displays latency metrics so users see exactly why async orchestration outperforms naive approaches.",
                    "Designed as a visual 'AI Team-Lead Race' — each strategy is a competing team with live status updates.",
                ]),
                outcome: "An interactive demo that makes abstract orchestration trade-offs concrete — users watch the race and instantly grasp async advantages.".to_string(),
                stack: strings(&["Next.js", "TypeScript", "OpenRouter", "DeepSeek", "Tailwind CSS", "Vercel"]),
                repo_url: "https://github.com/Chandan062311/Async_Think".to_string(),
                live_url: Some("https://async-think-csailabs.vercel.app".to_string()),
            },
        ],
        learning_radar: vec![
            LearningTopic {
                title: "Mechanistic Interpretability".to_string(),
                focus: "Monosemantic neurons, superposition analysis, BDH sparse models — understanding what's happening inside transformers.".to_string(),
                cadence: "Active".to_string(),
            },
            LearningTopic {
                title: "Agentic AI Patterns".to_string(),
                focus: "RAG orchestration, multi-agent coordination, async LLM pipelines — building systems where AI agents collaborate.".to_string(),
                cadence: "Active".to_string(),
            },
            LearningTopic {
                title: "Efficient Inference (CALM)".to_string(),
                focus: "Confident adaptive language modeling, speculative decoding, token-skipping — making LLMs faster without losing quality.".to_string(),
                cadence: "Weekly".to_string(),
            },
        ],
        contact_links: vec![
            link("Email", "mailto:chandansatwani@gmail.com"),
            link("GitHub", "https://github.com/Chandan062311"),
            link("LinkedIn", "https://www.linkedin.com/in/chandan-satwani/"),
            link("X / Twitter", "https://x.com/ChandanAILab"),
            link("YouTube", "https://www.youtube.com/@ChandanSatwani-ai"),
        ],
        theme: ThemeTokens {
            colors: ThemeId::Mining.preset().colors.to_tokens(),
            motion: MotionTokens {
                reveal: RevealMotion {
                    duration: 1.0,
                    ease: [0.19, 1.0, 0.22, 1.0],
                },
                stagger: 0.18,
                ambient_pulse: AmbientPulse {
                    duration: 5.0,
                    intensity: 1.015,
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_is_built_once() {
        assert!(std::ptr::eq(site(), site()));
    }

    #[test]
    fn test_every_section_has_nav_and_art() {
        let content = site();
        for section in SectionId::ALL {
            assert!(content.nav.iter().any(|n| n.id == section));
            assert!(content.section_art.contains_key(&section));
        }
    }

    #[test]
    fn test_theme_tokens_match_default_preset() {
        assert_eq!(site().theme.colors.accent_crimson, "#D88A2A");
    }
}
