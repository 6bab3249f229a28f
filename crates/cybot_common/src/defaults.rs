//! Built-in default content.
//!
//! These tables are what the bot ships with; external JSON files replace
//! them wholesale when present and valid (no partial merges).

/// Default topics with their tips, in display order.
pub fn default_topics() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "password safety",
            vec![
                "Create strong passwords: Use 12+ characters with complexity",
                "Mix uppercase, lowercase, numbers & symbols in passwords",
                "Never reuse passwords across different websites",
                "Use a reputable password manager to generate and store passwords",
                "Enable two-factor authentication for critical accounts",
            ],
        ),
        (
            "phishing",
            vec![
                "Be extremely cautious of urgent or threatening messages",
                "Always carefully examine sender email addresses",
                "Hover over links to preview the actual destination before clicking",
                "Never share personal or financial information via email",
                "Independently verify requests through official contact channels",
            ],
        ),
        (
            "safe browsing",
            vec![
                "Always ensure websites use HTTPS before entering sensitive information",
                "Keep browsers, operating systems, and software consistently updated",
                "Avoid conducting sensitive tasks on public or unsecured WiFi networks",
                "Use a reliable VPN when accessing the internet from public networks",
                "Install and regularly update comprehensive antivirus software",
            ],
        ),
        (
            "data protection",
            vec![
                "Regularly backup important data to multiple locations",
                "Use encryption for sensitive files and communications",
                "Securely delete files you no longer need using specialized tools",
                "Be careful when sharing files online and check permission settings",
                "Use secure cloud storage solutions with strong authentication",
            ],
        ),
        (
            "social media security",
            vec![
                "Review privacy settings regularly on all platforms",
                "Be selective about accepting connection requests from unknown individuals",
                "Avoid oversharing personal information that could be used for identity theft",
                "Be cautious about third-party applications requesting access to your accounts",
                "Use unique, strong passwords for each social media platform",
            ],
        ),
        (
            "mobile device security",
            vec![
                "Keep your device and apps updated with the latest security patches",
                "Only download apps from official stores like Google Play or Apple App Store",
                "Review app permissions carefully and limit unnecessary access",
                "Enable remote tracking and wiping features in case your device is lost",
                "Use biometric authentication or strong PIN codes rather than simple patterns",
            ],
        ),
        (
            "public wifi safety",
            vec![
                "Avoid accessing sensitive accounts or performing financial transactions on public WiFi",
                "Use a VPN when connecting to public networks to encrypt your traffic",
                "Verify network names before connecting to avoid evil twin attacks",
                "Turn off automatic WiFi connection to prevent connecting to rogue networks",
                "Disable file sharing when on public networks to prevent unauthorized access",
            ],
        ),
        (
            "malware prevention",
            vec![
                "Keep antivirus and anti-malware software updated and run regular scans",
                "Scan email attachments before opening, even if they appear to be from trusted sources",
                "Be cautious about downloading free software, especially from unofficial sources",
                "Watch for signs of infection such as system slowness or unexpected pop-ups",
                "Use specific protection against ransomware, such as frequent backups and restricted permissions",
            ],
        ),
        (
            "identity protection",
            vec![
                "Monitor your credit reports and financial statements regularly for suspicious activity",
                "Be careful about sharing personal identifiers like SSN, birth date, or address online",
                "Shred sensitive physical documents before disposing of them",
                "Consider using credit freezes or fraud alerts for additional protection",
                "Be alert for signs of identity theft such as unexpected bills or collection notices",
            ],
        ),
        (
            "remote work security",
            vec![
                "Secure your home network with WPA3 encryption and a strong, unique password",
                "Use your company's VPN when accessing work resources remotely",
                "Keep work and personal activities on separate devices when possible",
                "Follow company security policies, even when working from home",
                "Be extra vigilant about phishing attempts targeting remote workers",
            ],
        ),
        (
            "iot device security",
            vec![
                "Change default passwords on all smart devices immediately after setup",
                "Keep firmware and software updated on all connected devices",
                "Segment IoT devices on a separate network from your main home network",
                "Disable unnecessary features, services, and connectivity options",
                "Research security features and update policies before purchasing new smart devices",
            ],
        ),
    ]
}

/// Default jokes.
pub const DEFAULT_JOKES: [&str; 5] = [
    "My friend’s password was ‘incorrect’… now even his laptop roasts him daily!",
    "My antivirus caught a virus… now it needs therapy for trust issues!",
    "Why do cybersecurity experts make great detectives? They're always looking for suspicious activity!",
    "I told my WiFi we need to break up… but it begged me to stay connected!",
    "Why do hackers love dating apps? It’s the easiest way to steal your heart—and your data!",
];

/// Default mini-challenges.
pub const DEFAULT_CHALLENGES: [&str; 5] = [
    "Create a password that's at least 16 characters long!",
    "Spot the potential phishing email in a mock scenario.",
    "Identify three signs of an unsecure website.",
    "List two ways to protect your personal information online.",
    "Explain what two-factor authentication is.",
];

/// Default emoji pool for topic headers.
pub const DEFAULT_EMOJIS: [&str; 10] = [
    "🛡️", "🔒", "⚠️", "💻", "🌐", "🔍", "🛡️", "🚫", "🤖", "🔐",
];

/// Seeded question/answer pairs, persisted when no responses file exists.
pub fn default_responses() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "how are you",
            "I'm functioning optimally and ready to help with cybersecurity awareness!",
        ),
        (
            "what's your purpose",
            "I'm designed to raise cybersecurity awareness and provide helpful tips to keep you safe online.",
        ),
        (
            "what can i ask you about",
            "You can ask me about password safety, phishing, safe browsing, or try commands like 'joke', 'challenge', and 'help'.",
        ),
    ]
}

/// Shown when the active joke list is empty.
pub const NO_JOKES_MESSAGE: &str = "Sorry, I don't have any jokes available at the moment.";

/// Shown when the active challenge list is empty.
pub const NO_CHALLENGES_MESSAGE: &str =
    "Sorry, I don't have any challenges available at the moment.";

/// Shown when the emoji pool is empty.
pub const FALLBACK_EMOJI: &str = "🤔";

/// Shown when a query has no stored answer.
pub const UNKNOWN_QUERY_RESPONSE: &str = "I don't have a specific response for that. Try asking about cybersecurity topics like 'password safety', 'phishing', 'safe browsing', 'data protection', 'mobile device security', or 'identity protection'.";
