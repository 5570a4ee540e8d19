//! Static seed collections loaded once at startup.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::application::{ApplicationStatus, JobApplication, JobOpening, Tier};
use crate::models::event::{CalendarEvent, EventKind, EventStatus, Priority};
use crate::models::exam::{Difficulty, MockTest, Subject};
use crate::models::office::{
    Alert, Approval, ApprovalStatus, JobPosting, PostingStatus, Severity,
};
use crate::models::progress::{Badge, BadgeKind, StreakData};
use crate::models::resume::{Document, ResumeStatus, ResumeVersion, Template, TemplateLevel};

fn date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid seed date '{raw}'"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    tier: Tier,
    applied_on: &str,
    status: ApplicationStatus,
    deadline: &str,
    description: &str,
    requirements: &[&str],
    next_step: Option<&str>,
    progress: u8,
) -> Result<JobApplication> {
    Ok(JobApplication {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        tier,
        applied_on: date(applied_on)?,
        status,
        deadline: date(deadline)?,
        description: description.to_string(),
        requirements: strings(requirements),
        next_step: next_step.map(str::to_string),
        progress,
    })
}

pub fn applications() -> Result<Vec<JobApplication>> {
    use ApplicationStatus::*;

    Ok(vec![
        application(
            "1",
            "Software Engineer",
            "Google",
            "Bangalore",
            "₹18-25 LPA",
            Tier::One,
            "2024-01-15",
            Interview,
            "2024-02-15",
            "Develop and maintain scalable web applications",
            &["JavaScript", "React", "Node.js", "System Design"],
            Some("Technical Interview - Feb 20, 2024"),
            75,
        )?,
        application(
            "2",
            "Data Scientist",
            "Microsoft",
            "Hyderabad",
            "₹15-22 LPA",
            Tier::One,
            "2024-01-20",
            Shortlisted,
            "2024-02-20",
            "Build ML models and analyze large datasets",
            &["Python", "Machine Learning", "SQL", "Statistics"],
            Some("Coding Round - Feb 25, 2024"),
            50,
        )?,
        application(
            "3",
            "Frontend Developer",
            "Flipkart",
            "Bangalore",
            "₹12-18 LPA",
            Tier::Two,
            "2024-01-10",
            Rejected,
            "2024-02-10",
            "Create engaging user interfaces for e-commerce platform",
            &["React", "TypeScript", "CSS", "Mobile-first Design"],
            None,
            25,
        )?,
        application(
            "4",
            "Backend Engineer",
            "Zomato",
            "Delhi",
            "₹10-15 LPA",
            Tier::Two,
            "2024-01-25",
            Test,
            "2024-02-25",
            "Build robust APIs and microservices",
            &["Java", "Spring Boot", "MongoDB", "AWS"],
            Some("Online Assessment - Feb 28, 2024"),
            30,
        )?,
        application(
            "5",
            "Full Stack Developer",
            "Paytm",
            "Noida",
            "₹8-12 LPA",
            Tier::Three,
            "2024-02-01",
            Applied,
            "2024-03-01",
            "Develop end-to-end web applications",
            &["MERN Stack", "REST APIs", "Git", "Testing"],
            None,
            10,
        )?,
        application(
            "6",
            "Graduate Engineer Trainee",
            "Wipro",
            "Chennai",
            "₹4.5 LPA",
            Tier::Three,
            "2024-01-15",
            Offer,
            "2024-01-28",
            "Rotational programme across delivery units",
            &["Java", "SQL", "Communication"],
            Some("Response Required - Jan 28, 2024"),
            90,
        )?,
    ])
}

pub fn openings() -> Result<Vec<JobOpening>> {
    let opening = |id: &str,
                   title: &str,
                   company: &str,
                   salary: &str,
                   tier: Tier,
                   deadline: &str,
                   description: &str,
                   requirements: &[&str],
                   applicants: u32,
                   rating: f64|
     -> Result<JobOpening> {
        Ok(JobOpening {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: "Bangalore".to_string(),
            salary: salary.to_string(),
            tier,
            deadline: date(deadline)?,
            description: description.to_string(),
            requirements: strings(requirements),
            applicants,
            rating,
        })
    };

    Ok(vec![
        opening(
            "7",
            "Senior SDE",
            "Amazon",
            "₹20-30 LPA",
            Tier::One,
            "2024-03-15",
            "Lead software development projects and mentor junior developers",
            &["Java", "System Design", "Leadership", "AWS"],
            245,
            4.8,
        )?,
        opening(
            "8",
            "Product Manager",
            "Uber",
            "₹16-24 LPA",
            Tier::One,
            "2024-03-20",
            "Drive product strategy and work with cross-functional teams",
            &["Product Management", "Analytics", "Communication", "Strategy"],
            180,
            4.6,
        )?,
        opening(
            "9",
            "DevOps Engineer",
            "Swiggy",
            "₹12-18 LPA",
            Tier::Two,
            "2024-03-10",
            "Manage CI/CD pipelines and infrastructure automation",
            &["Docker", "Kubernetes", "AWS", "Jenkins"],
            120,
            4.4,
        )?,
    ])
}

pub fn mock_tests() -> Vec<MockTest> {
    let test = |id: &str,
                title: &str,
                subject: Subject,
                duration_minutes: u32,
                questions: u32,
                difficulty: Difficulty,
                score: Option<f64>,
                description: &str,
                topics: &[&str],
                company: Option<&str>| MockTest {
        id: id.to_string(),
        title: title.to_string(),
        subject,
        duration_minutes,
        questions,
        difficulty,
        attempted: score.is_some(),
        score,
        max_score: 100.0,
        description: description.to_string(),
        topics: strings(topics),
        company: company.map(str::to_string),
    };

    vec![
        test(
            "1",
            "Quantitative Aptitude - Basic",
            Subject::Aptitude,
            60,
            30,
            Difficulty::Easy,
            Some(85.0),
            "Basic quantitative aptitude covering arithmetic, algebra, and geometry",
            &["Arithmetic", "Algebra", "Geometry", "Percentages"],
            None,
        ),
        test(
            "2",
            "Logical Reasoning - Advanced",
            Subject::Reasoning,
            90,
            40,
            Difficulty::Hard,
            None,
            "Advanced logical reasoning with complex patterns and puzzles",
            &["Pattern Recognition", "Logical Sequences", "Analytical Reasoning"],
            None,
        ),
        test(
            "3",
            "Data Structures & Algorithms",
            Subject::Coding,
            120,
            25,
            Difficulty::Medium,
            Some(78.0),
            "Core DSA concepts with coding problems",
            &["Arrays", "LinkedList", "Trees", "Graphs", "Dynamic Programming"],
            None,
        ),
        test(
            "4",
            "English Communication",
            Subject::English,
            45,
            35,
            Difficulty::Easy,
            None,
            "Grammar, vocabulary, and comprehension skills",
            &["Grammar", "Vocabulary", "Reading Comprehension", "Sentence Correction"],
            None,
        ),
        test(
            "5",
            "Google SDE Mock Test",
            Subject::Coding,
            180,
            20,
            Difficulty::Hard,
            None,
            "Company specific test for Google SDE position",
            &["System Design", "Advanced Algorithms", "Problem Solving"],
            Some("Google"),
        ),
        test(
            "6",
            "Microsoft Aptitude Round",
            Subject::Aptitude,
            75,
            45,
            Difficulty::Medium,
            Some(92.0),
            "Microsoft specific aptitude and logical reasoning",
            &["Mathematical Reasoning", "Logical Puzzles", "Data Interpretation"],
            Some("Microsoft"),
        ),
    ]
}

pub fn calendar_events() -> Result<Vec<CalendarEvent>> {
    let event = |id: &str,
                 title: &str,
                 on: &str,
                 time: &str,
                 kind: EventKind,
                 company: Option<&str>,
                 location: &str,
                 description: &str,
                 status: EventStatus,
                 priority: Priority|
     -> Result<CalendarEvent> {
        Ok(CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            date: date(on)?,
            time: time.to_string(),
            kind,
            company: company.map(str::to_string),
            location: Some(location.to_string()),
            description: description.to_string(),
            status,
            priority,
        })
    };

    Ok(vec![
        event(
            "1",
            "Google Technical Interview",
            "2024-03-15",
            "10:00 AM - 11:30 AM",
            EventKind::Interview,
            Some("Google"),
            "Google Office, Bangalore",
            "Final round technical interview for Software Engineer position",
            EventStatus::Upcoming,
            Priority::High,
        )?,
        event(
            "2",
            "Microsoft Online Assessment",
            "2024-03-12",
            "2:00 PM - 4:00 PM",
            EventKind::Test,
            Some("Microsoft"),
            "Online",
            "Coding assessment for SDE-1 position",
            EventStatus::Upcoming,
            Priority::High,
        )?,
        event(
            "3",
            "Resume Submission Deadline",
            "2024-03-10",
            "11:59 PM",
            EventKind::Deadline,
            Some("Amazon"),
            "Online Portal",
            "Last date to submit resume for Amazon SDE positions",
            EventStatus::Today,
            Priority::High,
        )?,
        event(
            "4",
            "Mock Interview Session",
            "2024-03-08",
            "3:00 PM - 4:00 PM",
            EventKind::MockTest,
            None,
            "Placement Cell",
            "Practice interview session with industry mentors",
            EventStatus::Completed,
            Priority::Medium,
        )?,
        event(
            "5",
            "Flipkart HR Round",
            "2024-03-20",
            "11:00 AM - 12:00 PM",
            EventKind::Interview,
            Some("Flipkart"),
            "Video Call",
            "HR interview for Product Manager role",
            EventStatus::Upcoming,
            Priority::Medium,
        )?,
        event(
            "6",
            "Industry Expert Seminar",
            "2024-03-18",
            "4:00 PM - 6:00 PM",
            EventKind::Seminar,
            None,
            "Auditorium",
            "Career guidance seminar by industry professionals",
            EventStatus::Upcoming,
            Priority::Low,
        )?,
        event(
            "7",
            "Data Structures Workshop",
            "2024-03-25",
            "2:00 PM - 5:00 PM",
            EventKind::Workshop,
            None,
            "Computer Lab",
            "Hands-on workshop on advanced data structures",
            EventStatus::Upcoming,
            Priority::Medium,
        )?,
    ])
}

pub fn documents() -> Result<Vec<Document>> {
    let document = |id: &str,
                    name: &str,
                    kind: &str,
                    size: &str,
                    on: &str,
                    verified: bool|
     -> Result<Document> {
        Ok(Document {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            size: size.to_string(),
            uploaded_on: date(on)?,
            verified,
        })
    };

    Ok(vec![
        document("1", "10th Marksheet.pdf", "Academic", "1.2 MB", "2024-01-15", true)?,
        document("2", "12th Marksheet.pdf", "Academic", "1.5 MB", "2024-01-15", true)?,
        document("3", "BTech Transcript.pdf", "Academic", "2.1 MB", "2024-01-20", false)?,
        document(
            "4",
            "Internship Certificate.pdf",
            "Experience",
            "890 KB",
            "2024-02-01",
            true,
        )?,
        document(
            "5",
            "AWS Certification.pdf",
            "Certification",
            "1.8 MB",
            "2024-02-10",
            true,
        )?,
    ])
}

pub fn resume_versions() -> Result<Vec<ResumeVersion>> {
    let version = |id: &str,
                   name: &str,
                   completeness: u8,
                   on: &str,
                   is_default: bool,
                   status: ResumeStatus|
     -> Result<ResumeVersion> {
        Ok(ResumeVersion {
            id: id.to_string(),
            name: name.to_string(),
            completeness,
            updated_on: date(on)?,
            is_default,
            status,
        })
    };

    Ok(vec![
        version(
            "1",
            "Software Engineer Resume",
            85,
            "2024-01-20",
            true,
            ResumeStatus::Complete,
        )?,
        version(
            "2",
            "Data Science Resume",
            60,
            "2024-01-15",
            false,
            ResumeStatus::Draft,
        )?,
        version(
            "3",
            "Product Management Resume",
            45,
            "2024-01-10",
            false,
            ResumeStatus::Draft,
        )?,
    ])
}

pub fn templates() -> Vec<Template> {
    let template = |id: &str, name: &str, description: &str, level, rating, downloads| Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level,
        rating,
        downloads,
    };

    vec![
        template(
            "1",
            "Modern Professional",
            "Clean, modern design perfect for tech roles",
            TemplateLevel::Professional,
            4.8,
            1250,
        ),
        template(
            "2",
            "Classic Executive",
            "Traditional format for corporate positions",
            TemplateLevel::Executive,
            4.6,
            980,
        ),
        template(
            "3",
            "Creative Portfolio",
            "Showcase your projects and creativity",
            TemplateLevel::Professional,
            4.7,
            750,
        ),
        template(
            "4",
            "Student Friendly",
            "Perfect for freshers and students",
            TemplateLevel::Beginner,
            4.9,
            2100,
        ),
        template(
            "5",
            "Tech Specialist",
            "Designed for software engineers",
            TemplateLevel::Professional,
            4.8,
            1500,
        ),
        template(
            "6",
            "Minimalist",
            "Simple and elegant design",
            TemplateLevel::Beginner,
            4.5,
            890,
        ),
    ]
}

pub fn badges() -> Result<Vec<Badge>> {
    let earned = |id: &str,
                  name: &str,
                  description: &str,
                  kind: BadgeKind,
                  on: &str|
     -> Result<Badge> {
        Ok(Badge {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind,
            earned: true,
            progress: None,
            max_progress: None,
            earned_on: Some(date(on)?),
        })
    };
    let pending = |id: &str, name: &str, description: &str, kind, progress, max_progress| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        earned: false,
        progress: Some(progress),
        max_progress: Some(max_progress),
        earned_on: None,
    };

    Ok(vec![
        earned(
            "first-week",
            "Week Warrior",
            "Complete 7 consecutive days of practice",
            BadgeKind::Bronze,
            "2024-01-15",
        )?,
        earned(
            "test-master",
            "Test Master",
            "Complete 10 practice tests",
            BadgeKind::Silver,
            "2024-01-20",
        )?,
        pending(
            "streak-legend",
            "Streak Legend",
            "Maintain a 30-day streak",
            BadgeKind::Gold,
            7,
            30,
        ),
        earned(
            "resume-builder",
            "Profile Pro",
            "Complete and update your resume",
            BadgeKind::Bronze,
            "2024-01-12",
        )?,
        pending(
            "job-hunter",
            "Job Hunter",
            "Apply to 5 different companies",
            BadgeKind::Silver,
            2,
            5,
        ),
        pending(
            "interview-ace",
            "Interview Ace",
            "Complete 3 mock interviews",
            BadgeKind::Gold,
            0,
            3,
        ),
    ])
}

pub fn streak() -> StreakData {
    StreakData {
        current_streak: 7,
        longest_streak: 12,
        weekly_goal: 5,
        weekly_progress: 4,
        total_days: 45,
    }
}

pub fn job_postings() -> Vec<JobPosting> {
    let posting = |id: &str, title: &str, applications, status| JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        applications,
        status,
    };

    vec![
        posting("1", "Senior Software Engineer", 45, PostingStatus::Active),
        posting("2", "Product Manager", 32, PostingStatus::Active),
        posting("3", "Data Scientist", 28, PostingStatus::Draft),
    ]
}

pub fn alerts() -> Vec<Alert> {
    let alert = |id: &str, kind: &str, message: &str, severity| Alert {
        id: id.to_string(),
        kind: kind.to_string(),
        message: message.to_string(),
        severity,
    };

    vec![
        alert(
            "1",
            "Rule Violation",
            "Student applied to lower tier after placement",
            Severity::High,
        ),
        alert(
            "2",
            "Eligibility Issue",
            "5 students don't meet CGPA criteria",
            Severity::Medium,
        ),
        alert(
            "3",
            "Deadline Alert",
            "TCS application closes in 2 days",
            Severity::Low,
        ),
    ]
}

pub fn approvals() -> Vec<Approval> {
    let approval = |id: &str, company: &str, kind: &str, status| Approval {
        id: id.to_string(),
        company: company.to_string(),
        kind: kind.to_string(),
        status,
    };

    vec![
        approval("1", "Microsoft", "Job Posting", ApprovalStatus::Review),
        approval("2", "Amazon", "Company Registration", ApprovalStatus::Pending),
        approval("3", "Infosys", "Drive Schedule", ApprovalStatus::Approved),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_seed_dates_parse() {
        assert_eq!(applications().unwrap().len(), 6);
        assert_eq!(openings().unwrap().len(), 3);
        assert_eq!(calendar_events().unwrap().len(), 7);
        assert_eq!(documents().unwrap().len(), 5);
        assert_eq!(resume_versions().unwrap().len(), 3);
        assert_eq!(badges().unwrap().len(), 6);
    }

    #[test]
    fn test_attempted_tracks_score() {
        for test in mock_tests() {
            assert_eq!(test.attempted, test.score.is_some(), "test {}", test.id);
        }
    }

    #[test]
    fn test_bad_seed_date_is_an_error() {
        let err = date("2024-02-30").unwrap_err().to_string();
        assert!(err.contains("2024-02-30"));
    }
}
