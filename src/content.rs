//! Static page content. Every section renders from these fixed arrays; no
//! component feeds data back into them.

pub const BRAND: &str = "Web Artist";
pub const OWNER_NAME: &str = "Apu Nath";
pub const DESIGNATION: &str = "Frontend-Based MERN Stack Developer";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1xRFSlvYOErAWWlntK9YTmN0vC_B30ncw/view?usp=sharing";
pub const PORTRAIT_URL: &str =
    "https://drive.google.com/file/d/1JYifDAtnDvLZ4OlN4h1J1m1dtg-NNJDD/view?usp=drive_link";
pub const ABOUT_PORTRAIT_URL: &str =
    "https://media.licdn.com/dms/image/v2/D5603AQGcrSjfiovJgw/profile-displayphoto-scale_400_400/B56Zqf6AzBHQAg-/0/1763619380608?e=1769040000&v=beta&t=wdmaoG33v083X1SUM47TmxFU_erUuQa_-Boxe72gH0o";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Services",
        href: "#services",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    /// Material icon ligature rendered inside the link.
    pub icon: &'static str,
    pub url: &'static str,
}

pub static HERO_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        icon: "code",
        url: "https://github.com/opunath26",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "account_circle",
        url: "https://www.linkedin.com/in/apu-nath-76a490392/",
    },
    SocialLink {
        name: "Facebook",
        icon: "facebook",
        url: "https://www.facebook.com/oputhecoder26",
    },
];

pub static FOOTER_SOCIALS: [SocialLink; 5] = [
    SocialLink {
        name: "LinkedIn",
        icon: "account_circle",
        url: "https://www.linkedin.com/in/apu-nath-76a490392/",
    },
    SocialLink {
        name: "GitHub",
        icon: "code",
        url: "https://github.com/opunath26",
    },
    SocialLink {
        name: "Facebook",
        icon: "facebook",
        url: "https://www.facebook.com/oputhecoder26",
    },
    SocialLink {
        name: "Instagram",
        icon: "photo_camera",
        url: "https://www.instagram.com/artistop26?utm_source=qr",
    },
    SocialLink {
        name: "WhatsApp",
        icon: "chat",
        url: "https://wa.me/8801518671881",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat {
        value: "8+",
        label: "Months of Practice",
    },
    Stat {
        value: "10+",
        label: "Practice Projects",
    },
    Stat {
        value: "1000+",
        label: "Hours of Coding",
    },
];

pub struct TraitCard {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static ABOUT_TRAITS: [TraitCard; 4] = [
    TraitCard {
        icon: "history_edu",
        text: "My Journey",
    },
    TraitCard {
        icon: "favorite",
        text: "Love UI/UX",
    },
    TraitCard {
        icon: "sports_cricket",
        text: "Cricket Fan",
    },
    TraitCard {
        icon: "explore",
        text: "Traveling",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub department: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub static EDUCATION: [Education; 2] = [
    Education {
        degree: "Diploma in Computer Engineering",
        institution: "Bangladesh Sweden Polytechnic Institute",
        department: "Computer Science & Technology (CST)",
        duration: "2023 - 2026",
        description: "Studying Computer Engineering with a focus on web development, \
            programming fundamentals, data structures, and modern software technologies. \
            Gaining hands-on experience through academic and personal projects.",
    },
    Education {
        degree: "Higher Secondary Certificate (HSC) - Vocational",
        institution: "Khagrachari Government Technical School and College",
        department: "Electrical Works and Maintenance",
        duration: "2017 - 2022",
        description: "Completed HSC with a technical focus on Electrical Works and \
            Maintenance, including basic electrical systems, wiring, and practical \
            laboratory training.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub percentage: u32,
}

pub static SKILLS: [Skill; 5] = [
    Skill {
        name: "React",
        percentage: 70,
    },
    Skill {
        name: "JavaScript",
        percentage: 75,
    },
    Skill {
        name: "Node.js",
        percentage: 60,
    },
    Skill {
        name: "Tailwind CSS",
        percentage: 65,
    },
    Skill {
        name: "MongoDB",
        percentage: 50,
    },
];

pub struct Service {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        number: "01",
        title: "Frontend Development",
        description: "Building responsive web applications and learning best practices \
            in React and JavaScript.",
    },
    Service {
        number: "02",
        title: "MERN Stack Projects",
        description: "Creating full-stack applications using MongoDB, Express.js, React, \
            and Node.js.",
    },
    Service {
        number: "03",
        title: "Learning & Experimenting",
        description: "Continuously improving my skills by experimenting with new frameworks.",
    },
];

pub static TECH_STACK: [&str; 6] = [
    "React",
    "JavaScript",
    "Tailwind CSS",
    "Node.js",
    "MongoDB",
    "Git",
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub live_url: &'static str,
    pub repo_url: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub challenges: &'static str,
    pub future_plans: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Skill Path",
        category: "Web Development",
        image: "/assets/project1.svg",
        live_url: "https://ubiquitous-longma-59b633.netlify.app/",
        repo_url: "https://github.com/opunath26/skillpath-client.git",
        description: "Skill Path is an interactive learning platform designed to help \
            students master new skills with ease.",
        tech_stack: &["React", "Firebase", "Tailwind CSS", "Framer Motion"],
        challenges: "Managing complex state for the course progress and ensuring a smooth \
            user experience across all devices was a major challenge.",
        future_plans: "Plan to add a community forum and real-time quiz feature to enhance \
            student engagement.",
    },
    Project {
        title: "AppOrbit",
        category: "Web Development",
        image: "/assets/project2.svg",
        live_url: "https://apporbit.pages.dev/",
        repo_url: "https://github.com/opunath26/apporbit-store.git",
        description: "AppOrbit is a modern marketplace for digital assets, allowing users \
            to browse and buy applications.",
        tech_stack: &["React", "Node.js", "MongoDB", "Express"],
        challenges: "Implementing a secure payment gateway and handling large image uploads \
            efficiently were the key hurdles.",
        future_plans: "Integrating AI-driven recommendations based on user search history.",
    },
    Project {
        title: "WarmPaws",
        category: "Web Development",
        image: "/assets/project3.svg",
        live_url: "https://green-earth-op.pages.dev/",
        repo_url: "https://github.com/opunath26/warmpaws",
        description: "A non-profit initiative focused on providing pet care and shelter \
            during harsh winter months.",
        tech_stack: &["React", "Tailwind CSS", "EmailJS"],
        challenges: "Creating a high-performance donation form that feels intuitive while \
            maintaining a clean look.",
        future_plans: "Expanding to a full-scale pet adoption tracking system with local \
            shelter integration.",
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub url: Option<&'static str>,
}

pub static CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail {
        icon: "email",
        label: "Email",
        value: "aputhecoder26@gmail.com",
        url: None,
    },
    ContactDetail {
        icon: "call",
        label: "Phone",
        value: "+880 1518671881",
        url: None,
    },
    ContactDetail {
        icon: "chat",
        label: "WhatsApp",
        value: "+880 1518671881",
        url: Some("https://web.whatsapp.com/"),
    },
    ContactDetail {
        icon: "location_on",
        label: "Location",
        value: "Chattogram, Bangladesh",
        url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_percentages_fit_a_bar() {
        for skill in &SKILLS {
            assert!(skill.percentage <= 100, "{} overflows its bar", skill.name);
        }
    }

    #[test]
    fn every_project_links_out() {
        for project in &PROJECTS {
            assert!(project.live_url.starts_with("https://"));
            assert!(project.repo_url.starts_with("https://"));
            assert!(!project.tech_stack.is_empty());
        }
    }

    #[test]
    fn nav_links_are_fragment_anchors() {
        for link in &NAV_LINKS {
            assert!(link.href.starts_with('#'));
        }
    }
}
