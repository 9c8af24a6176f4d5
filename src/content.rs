//! Static page content for pulpit
//!
//! This module holds the content-page inventory and the organization
//! copy each page renders. Pages are purely presentational: the media,
//! verse, and contact pages compose the interactive components, the
//! rest is static text.

use crate::media::MediaKind;

/// The pages of the console, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page
    Home,
    /// About the ministry
    About,
    /// Mission statement
    Mission,
    /// Vision statement
    Vision,
    /// The Great Commission mandate
    Commission,
    /// Bible verse search
    Bible,
    /// Bible study schedule
    BibleStudy,
    /// Community outreach programs
    Community,
    /// Photo gallery
    Gallery,
    /// Video sermons
    Sermons,
    /// Audio sermons
    Audio,
    /// Contact form
    Contact,
}

impl Page {
    /// Returns all pages in navigation order
    pub fn all() -> Vec<Page> {
        vec![
            Page::Home,
            Page::About,
            Page::Mission,
            Page::Vision,
            Page::Commission,
            Page::Bible,
            Page::BibleStudy,
            Page::Community,
            Page::Gallery,
            Page::Sermons,
            Page::Audio,
            Page::Contact,
        ]
    }

    /// Returns the page heading
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Welcome",
            Page::About => "About Our Ministry",
            Page::Mission => "Our Mission",
            Page::Vision => "Our Vision",
            Page::Commission => "The Great Commission Mandate",
            Page::Bible => "Bible Search",
            Page::BibleStudy => "Bible Study",
            Page::Community => "Community Outreach",
            Page::Gallery => "Photo Gallery",
            Page::Sermons => "Video Sermons",
            Page::Audio => "Audio Sermons",
            Page::Contact => "Contact Us",
        }
    }

    /// Returns the short label used in the navigation tabs
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Mission => "Mission",
            Page::Vision => "Vision",
            Page::Commission => "Commission",
            Page::Bible => "Bible",
            Page::BibleStudy => "Bible Study",
            Page::Community => "Community",
            Page::Gallery => "Gallery",
            Page::Sermons => "Sermons",
            Page::Audio => "Audio",
            Page::Contact => "Contact",
        }
    }

    /// Returns the media kind a page uploads and lists, if any
    pub fn media_kind(&self) -> Option<MediaKind> {
        match self {
            Page::Gallery => Some(MediaKind::Image),
            Page::Sermons => Some(MediaKind::Video),
            Page::Audio => Some(MediaKind::Audio),
            _ => None,
        }
    }
}

/// Contact details shown on the contact page
pub const CONTACT_ADDRESS: &str = "123 Church Street, City, State 12345";
/// Contact phone number
pub const CONTACT_PHONE: &str = "(555) 123-4567";
/// Contact email address
pub const CONTACT_EMAIL: &str = "info@newbreedministries.org";

/// Service times shown on the contact page
pub const SERVICE_TIMES: &[&str] = &[
    "Sunday Service: 9:00 AM & 11:00 AM",
    "Wednesday Bible Study: 7:00 PM",
    "Friday Prayer Meeting: 6:30 PM",
];

/// One block of a static page
#[derive(Debug, Clone)]
pub struct Section {
    /// Optional section heading
    pub heading: Option<&'static str>,
    /// Paragraphs of body text
    pub paragraphs: &'static [&'static str],
    /// Bullet list items
    pub bullets: &'static [&'static str],
}

impl Section {
    fn text(heading: Option<&'static str>, paragraphs: &'static [&'static str]) -> Self {
        Self {
            heading,
            paragraphs,
            bullets: &[],
        }
    }

    fn list(heading: Option<&'static str>, bullets: &'static [&'static str]) -> Self {
        Self {
            heading,
            paragraphs: &[],
            bullets,
        }
    }
}

/// Returns the static sections of a page
pub fn page_sections(page: Page) -> Vec<Section> {
    match page {
        Page::Home => vec![
            Section::text(
                None,
                &["Transforming lives through the power of God's Word."],
            ),
            Section::list(
                Some("Join Us"),
                &[
                    "Worship Services: Sundays at 9:00 AM & 11:00 AM",
                    "Bible Study: Wednesdays at 7:00 PM",
                    "Community Outreach: Making a difference in our community",
                ],
            ),
        ],
        Page::About => vec![
            Section::text(
                None,
                &[
                    "THE NEW BREED MINISTRIES WORLDWIDE was founded in 2020 with a mission to spread the Gospel and make disciples of all nations. We believe in the transformative power of God's Word and the work of the Holy Spirit.",
                    "Our church is committed to serving the community, supporting families, and helping individuals grow in their relationship with Christ.",
                ],
            ),
            Section::list(
                Some("Our Beliefs"),
                &[
                    "We believe in the Trinity: Father, Son, and Holy Spirit",
                    "We believe in the authority of Scripture",
                    "We believe in salvation through Jesus Christ alone",
                    "We believe in the power of prayer",
                    "We believe in the Great Commission",
                ],
            ),
        ],
        Page::Mission => vec![
            Section::text(
                Some("The Great Commission"),
                &[
                    "\"Therefore go and make disciples of all nations, baptizing them in the name of the Father and of the Son and of the Holy Spirit, and teaching them to obey everything I have commanded you.\" - Matthew 28:19-20",
                ],
            ),
            Section::text(
                Some("Our Mission Statement"),
                &[
                    "THE NEW BREED MINISTRIES WORLDWIDE exists to glorify God by making disciples of all nations through the proclamation of the Gospel, the teaching of God's Word, and the demonstration of God's love in practical ways.",
                ],
            ),
            Section::list(
                Some("Our Core Objectives"),
                &[
                    "Evangelism: to share the good news of Jesus Christ with everyone we encounter",
                    "Discipleship: to help believers grow in their faith and become mature followers of Christ",
                    "Worship: to glorify God through heartfelt worship and obedience",
                    "Fellowship: to build a loving community where believers can encourage and support one another",
                    "Service: to demonstrate God's love by serving our community and meeting practical needs",
                ],
            ),
        ],
        Page::Vision => vec![
            Section::text(
                Some("Kingdom Vision"),
                &["\"Where there is no vision, the people perish.\" - Proverbs 29:18"],
            ),
            Section::text(
                Some("Our Vision Statement"),
                &[
                    "To be a transformative force in our world by raising up a new breed of believers who are grounded in God's Word, empowered by the Holy Spirit, and committed to advancing God's Kingdom in every sphere of society.",
                ],
            ),
            Section::list(
                Some("Our Future Direction"),
                &[
                    "Spiritual Renewal: individuals, families, and communities transformed by the power of the Gospel",
                    "Church Planting: vibrant, reproducing churches in every community",
                    "Leadership Development: equipping the next generation of Christian leaders",
                    "Cultural Impact: influencing every sector of society with Biblical values",
                    "Global Reach: extending our ministry impact to nations around the world",
                ],
            ),
        ],
        Page::Commission => vec![
            Section::text(
                Some("Our Divine Mandate"),
                &[
                    "\"All authority has been given to Me in heaven and on earth. Go therefore and make disciples of all the nations, baptizing them in the name of the Father and of the Son and of the Holy Spirit, teaching them to observe all things that I have commanded you; and lo, I am with you always, even to the end of the age.\" - Matthew 28:18-20 (NKJV)",
                ],
            ),
            Section::list(
                Some("The Five-Fold Commission"),
                &[
                    "AUTHORITY - we operate under Christ's supreme authority",
                    "GO - every believer is commissioned to go and share the Gospel",
                    "MAKE DISCIPLES - not just conversion but transformation",
                    "BAPTIZE - a public declaration of faith and identification with Christ",
                    "TEACH - comprehensive biblical education and practical obedience",
                ],
            ),
            Section::list(
                Some("Our Commission Implementation"),
                &[
                    "Local: house-to-house evangelism, street witnessing, prison ministry and hospital visitation",
                    "National: church planting, leadership training, media evangelism and digital outreach",
                    "International: cross-cultural missionary sending, humanitarian aid, Bible translation and distribution",
                ],
            ),
        ],
        Page::Bible => vec![Section::text(
            None,
            &["Use the search controls to find Bible verses"],
        )],
        Page::BibleStudy => vec![
            Section::list(
                Some("Weekly Study Topics"),
                &[
                    "The Power of Prayer - Wednesdays at 7:00 PM",
                    "Understanding Grace - Thursdays at 6:30 PM",
                    "Walking in Faith - Saturdays at 10:00 AM",
                ],
            ),
            Section::list(
                Some("Study Resources"),
                &[
                    "Downloadable study guides",
                    "Audio recordings of past studies",
                    "Recommended reading lists",
                    "Online discussion forums",
                ],
            ),
        ],
        Page::Community => vec![
            Section::list(
                Some("Our Programs"),
                &[
                    "Food Pantry - every Saturday 9AM-12PM, providing groceries for families in need",
                    "Youth Mentoring - Mondays and Wednesdays 4PM-6PM, positive role models for at-risk youth",
                    "Senior Visitation - twice monthly, companionship and assistance for elderly community members",
                    "Community Cleanup - first Saturday of each month, beautifying our neighborhood together",
                ],
            ),
            Section::text(
                Some("Volunteer Opportunities"),
                &["Every program welcomes new volunteers. Reach out through the contact page to get involved."],
            ),
        ],
        Page::Gallery => vec![Section::text(
            Some("Upload Image"),
            &["Share photos from church events with the congregation."],
        )],
        Page::Sermons => vec![Section::text(
            Some("Upload Video Sermon"),
            &["Recent messages are listed below; select one to play it."],
        )],
        Page::Audio => vec![
            Section::text(
                Some("Upload Audio Sermon"),
                &["Supported formats: MP3, WAV, OGG, M4A (Max size: 100MB)"],
            ),
            Section::list(
                Some("Types of Audio Content"),
                &[
                    "Sunday Sermons",
                    "Midweek Bible Studies",
                    "Prayer Meeting Messages",
                    "Special Event Teachings",
                    "Testimonies and Life Stories",
                    "Worship and Praise Sessions",
                ],
            ),
        ],
        Page::Contact => vec![Section::text(
            Some("Visit Us"),
            &[
                "We'd love to meet you in person! Join us for any of our services or events.",
                "\"For where two or three gather in my name, there am I with them.\" - Matthew 18:20",
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_order() {
        let pages = Page::all();
        assert_eq!(pages.len(), 12);
        assert_eq!(pages[0], Page::Home);
        assert_eq!(pages[11], Page::Contact);
    }

    #[test]
    fn test_media_pages() {
        assert_eq!(Page::Gallery.media_kind(), Some(MediaKind::Image));
        assert_eq!(Page::Sermons.media_kind(), Some(MediaKind::Video));
        assert_eq!(Page::Audio.media_kind(), Some(MediaKind::Audio));
        assert_eq!(Page::Home.media_kind(), None);
    }

    #[test]
    fn test_every_page_has_content() {
        for page in Page::all() {
            assert!(!page.title().is_empty());
            assert!(!page_sections(page).is_empty(), "{page:?} has no sections");
        }
    }
}
