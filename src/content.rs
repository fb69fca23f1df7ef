//! Literal portfolio content. Everything here is `'static` and never changes
//! while the process runs.

use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectItem {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub source_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationItem {
    pub institution: &'static str,
    pub degree: &'static str,
    /// Free-text range, e.g. "Jun 2020 – Apr 2024".
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementItem {
    pub title: &'static str,
    pub event: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateItem {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: Option<&'static str>,
    pub details: Option<&'static str>,
    pub link: Option<&'static str>,
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Ats,
    Creative,
}

impl Resume {
    pub const ALL: [Resume; 2] = [Resume::Ats, Resume::Creative];

    /// Site-relative path of the file under `public/`.
    pub fn path(self) -> &'static str {
        match self {
            Resume::Ats => "/Shaik_Mohamed_Fahad_Resume_ATS.pdf",
            Resume::Creative => "/Shaik_Mohamed_Fahad_Resume.pdf",
        }
    }

    pub fn file_name(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn label(self) -> &'static str {
        match self {
            Resume::Ats => "ATS Resume",
            Resume::Creative => "Creative Resume",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Upper-cased form shown in the hero banner.
    pub display_name: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub phone: &'static str,
    /// Country code + number, no separators.
    pub whatsapp_phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub skills: &'static [&'static str],
    pub photo_url: &'static str,
    pub photo_alt: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub discord_url: &'static str,
    pub instagram_url: &'static str,
    pub author_handle: &'static str,
    pub builder_name: &'static str,
    pub builder_url: &'static str,
}

impl Profile {
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", build_year(), self.name)
    }
}

/// Year the site was built, so server render and hydration print the same
/// footer.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

pub static PROFILE: Profile = Profile {
    name: "Shaik Mohamed Fahad",
    display_name: "SHAIK MOHAMED FAHAD .T",
    headline: "Python Developer",
    about: "I'm a Python Developer with 6 months of experience in software application development. I excel at solving problems and creating innovative solutions, such as developing APIs, automated bots, and secure communications systems. I'm quick to learn new technologies and thrive in fast-paced environments. Passionate about coding, I constantly seek to improve my skills and embrace new challenges.",
    phone: "+91 73736 75313",
    whatsapp_phone: "917373675313",
    email: "fahadguy8@gmail.com",
    location: "Chennai, Tamil Nadu",
    skills: &["Python", "Git", "GitHub", "SQL", "AWS"],
    photo_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/IMG_20230317_123617.jpg-PUBHZyiKZyhhJvIQ1qbsKYIqbGHpkz.jpeg",
    photo_alt: "Profile photo in a tea plantation",
    github_url: "https://github.com/i-am-smf",
    linkedin_url: "https://www.linkedin.com/in/shaik-mohamed-fahad-826971178",
    discord_url: "https://discord.gg/MGr2ZemqyE",
    instagram_url: "https://www.instagram.com/i_am_smf_/",
    author_handle: "i_am_smf_.py",
    builder_name: "v0.dev",
    builder_url: "https://v0.dev",
};

pub static PROJECTS: [ProjectItem; 3] = [
    ProjectItem {
        title: "AFK Monitoring System",
        description: "Developed a system to monitor idle time on a computer and shut it down if idle time exceeds the allowed limit.",
        details: "Implemented using Python with the pyautogui library for detecting user activity. Features include customizable idle time thresholds, warning notifications, and automatic shutdown procedures.",
        source_url: "https://github.com/i-am-smf/afk-monitering-sytem",
    },
    ProjectItem {
        title: "Secure Chat API",
        description: "Developed a Secure Chat API with end-to-end encryption and Blockchain-based authentication to ensure secure communication.",
        details: "The project involved translating design specifications into a fully functional system, integrating Fernet encryption for secure message transmission and smart contracts for automated user verification. Technologies: Python (Tkinter, Threading, Socket), Blockchain Authentication, Smart Contracts, Fernet Encryption. The implementation focused on code quality, efficiency, and maintainability, following best practices in software development. System Requirements: 4GB RAM, Windows (8/10/11), Linux, Ubuntu.",
        source_url: "https://github.com/i-am-smf/Secure-Chat-using-Blockchain",
    },
    ProjectItem {
        title: "Infinity Developer Discord Bot",
        description: "Developed a fully automated bot to manage guild channels, duties, and settings on Discord.",
        details: "Utilized discord.py library with advanced features like role management, custom commands, and integration with external APIs for enhanced functionality. Implements efficient caching and database management for scalability.",
        source_url: "https://github.com/infinity-developers/Infinity-Developer-Discord-Bot",
    },
];

pub static EDUCATION: [EducationItem; 2] = [
    EducationItem {
        institution: "M.I.E.T. Engineering College",
        degree: "B.E. Computer Science",
        duration: "Jun 2020 – Apr 2024",
    },
    EducationItem {
        institution: "Sairam Matric Hr. Sec. School",
        degree: "12th Grade",
        duration: "Jun 2019 – Mar 2020",
    },
];

pub static ACHIEVEMENTS: [AchievementItem; 4] = [
    AchievementItem {
        title: "1st Place - Miniathon Event",
        event: "Arcane 2K23 National Level Technical Symposium",
        date: "September 13, 2023",
    },
    AchievementItem {
        title: "1st Prize - Code Battle Event",
        event: "Technoholix'23, National Level Technical Symposium",
        date: "February 17, 2023",
    },
    AchievementItem {
        title: "2nd Place - Zoom in Zoom out Event",
        event: "Analytiixfest2k23 State Level Technical Symposium",
        date: "February 2, 2023",
    },
    AchievementItem {
        title: "3rd Place - TechVein Event",
        event: "TechQuest'23, National Level Technical Symposium",
        date: "September 15, 2023",
    },
];

pub static CERTIFICATES: [CertificateItem; 3] = [
    CertificateItem {
        title: ".NET using C# language",
        organization: "Ameya Cloud",
        date: Some("May 24, 2022 – Jun 1, 2022"),
        details: Some("Learned to create applications using .NET with Microsoft Visual Studio."),
        link: Some("https://ameyacloud.com"),
        image: Some("https://hebbkx1anhila5yf.public.blob.vercel-storage.com/1739869980871.jpg-YL0g3FWZTgDJSYXYOiXvjZSS20wjCu.jpeg"),
    },
    CertificateItem {
        title: "RDBMS using MySQL",
        organization: "GFS India",
        date: Some("Sep 19, 2022 – Sep 26, 2022"),
        details: Some("Gained hands-on experience with SQL queries."),
        link: Some("https://gfsindia.com"),
        image: Some("https://hebbkx1anhila5yf.public.blob.vercel-storage.com/1739869980885.jpg-zcQSO1Q3nHVkI7BWhLuYjXurBff2KI.jpeg"),
    },
    CertificateItem {
        title: "DevOps on AWS",
        organization: "M.I.E.T. Engineering College",
        date: Some("Mar 20, 2023 – Mar 29, 2023"),
        details: Some("Practiced various Git commands and DevOps tools on AWS."),
        link: Some("https://miet.edu"),
        image: Some("https://hebbkx1anhila5yf.public.blob.vercel-storage.com/1739869980877.jpg-1OUDvkvP01abfrC8Af9vKKSLDFFM9b.jpeg"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_paths() {
        assert_eq!(Resume::Ats.path(), "/Shaik_Mohamed_Fahad_Resume_ATS.pdf");
        assert_eq!(Resume::Ats.file_name(), "Shaik_Mohamed_Fahad_Resume_ATS.pdf");
        assert_eq!(Resume::Creative.path(), "/Shaik_Mohamed_Fahad_Resume.pdf");
        assert_eq!(Resume::Creative.file_name(), "Shaik_Mohamed_Fahad_Resume.pdf");
    }

    #[test]
    fn test_copyright() {
        let year = build_year();
        assert!(year >= 2024);
        assert_eq!(
            PROFILE.copyright(),
            format!("© {year} Shaik Mohamed Fahad. All rights reserved.")
        );
    }

    #[test]
    fn test_whatsapp_phone_has_no_separators() {
        assert!(PROFILE.whatsapp_phone.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_resume_file_name_strips_leading_slash() {
        for resume in Resume::ALL {
            assert_eq!(format!("/{}", resume.file_name()), resume.path());
            assert!(!resume.file_name().contains('/'));
        }
    }
}
