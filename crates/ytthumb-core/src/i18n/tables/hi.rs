pub(crate) const HI: &[(&str, &str)] = &[
    ("title", "YouTube थंबनेल डाउनलोडर"),
    ("subtitle", "लिंक से किसी YouTube वीडियो के सभी आकार के थंबनेल पाएं"),
    ("inputPlaceholder", "YouTube वीडियो का URL पेस्ट करें"),
    ("getThumbnailButton", "थंबनेल पाएं"),
    ("errorInvalidUrl", "कृपया एक मान्य YouTube URL दर्ज करें"),
    ("errorDownloadFailed", "डाउनलोड विफल रहा, कृपया फिर से प्रयास करें"),
    ("thumbnailMaxRes", "अधिकतम रिज़ॉल्यूशन"),
    ("thumbnailSD", "मानक परिभाषा"),
    ("thumbnailHigh", "उच्च गुणवत्ता"),
    ("thumbnailMedium", "मध्यम गुणवत्ता"),
    ("thumbnailDefault", "डिफ़ॉल्ट"),
    ("imageNotAvailable", "छवि उपलब्ध नहीं है"),
    ("imageAvailable", "उपलब्ध"),
    ("downloadButton", "डाउनलोड करें"),
    ("savedTo", "यहाँ सहेजा गया"),
    ("privacyPolicy", "गोपनीयता नीति"),
    ("backToHome", "होम पर वापस जाएं"),
    ("writtenBy", "लेखक"),
    ("onDate", "दिनांक"),
    ("currentLanguage", "वर्तमान भाषा"),
    ("languageChanged", "भाषा बदली गई"),
];
