//! Built-in mock data: three job postings and three candidate profiles.

use crate::types::{Candidate, Job};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Frontend Developer".to_string(),
            company: "Tech Innovations Inc.".to_string(),
            logo: "https://api.dicebear.com/7.x/avataaars/svg?seed=techinn".to_string(),
            description: "We are looking for a skilled frontend developer with experience in React and modern JavaScript frameworks.".to_string(),
            location: "San Francisco, CA".to_string(),
            tags: strings(&["React", "JavaScript", "TypeScript", "Remote"]),
            salary: Some("$120,000 - $150,000".to_string()),
        },
        Job {
            id: "2".to_string(),
            title: "UX Designer".to_string(),
            company: "Creative Solutions".to_string(),
            logo: "https://api.dicebear.com/7.x/avataaars/svg?seed=creative".to_string(),
            description: "Join our design team to create beautiful and intuitive user experiences for our clients.".to_string(),
            location: "New York, NY".to_string(),
            tags: strings(&["Figma", "UI/UX", "Prototyping", "Hybrid"]),
            salary: Some("$90,000 - $120,000".to_string()),
        },
        Job {
            id: "3".to_string(),
            title: "Full Stack Engineer".to_string(),
            company: "Growth Startup".to_string(),
            logo: "https://api.dicebear.com/7.x/avataaars/svg?seed=growth".to_string(),
            description: "Looking for a versatile developer who can work across our entire stack and help us scale.".to_string(),
            location: "Austin, TX".to_string(),
            tags: strings(&["Node.js", "React", "MongoDB", "AWS", "On-site"]),
            salary: Some("$130,000 - $160,000".to_string()),
        },
    ]
}

pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            photo: "https://api.dicebear.com/7.x/avataaars/svg?seed=alex".to_string(),
            title: "Senior Frontend Developer".to_string(),
            description: "5+ years of experience building responsive web applications with React and TypeScript.".to_string(),
            skills: strings(&["React", "TypeScript", "Redux", "CSS-in-JS"]),
            location: "Seattle, WA".to_string(),
            experience: Some("5 years".to_string()),
        },
        Candidate {
            id: "2".to_string(),
            name: "Jamie Smith".to_string(),
            photo: "https://api.dicebear.com/7.x/avataaars/svg?seed=jamie".to_string(),
            title: "UX/UI Designer".to_string(),
            description: "Passionate designer with a portfolio of user-centered digital products and experiences.".to_string(),
            skills: strings(&["Figma", "Adobe XD", "User Research", "Prototyping"]),
            location: "Portland, OR".to_string(),
            experience: Some("3 years".to_string()),
        },
        Candidate {
            id: "3".to_string(),
            name: "Taylor Wilson".to_string(),
            photo: "https://api.dicebear.com/7.x/avataaars/svg?seed=taylor".to_string(),
            title: "Full Stack Developer".to_string(),
            description: "Full stack developer with expertise in MERN stack and cloud infrastructure.".to_string(),
            skills: strings(&["JavaScript", "React", "Node.js", "MongoDB", "AWS"]),
            location: "Chicago, IL".to_string(),
            experience: Some("4 years".to_string()),
        },
    ]
}
