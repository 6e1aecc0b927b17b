pub(crate) const EN: &[(&str, &str)] = &[
    ("title", "YouTube Thumbnail Downloader"),
    ("subtitle", "Get every thumbnail size of a YouTube video from its link"),
    ("inputPlaceholder", "Paste a YouTube video URL"),
    ("getThumbnailButton", "Get Thumbnails"),
    ("errorInvalidUrl", "Please enter a valid YouTube URL"),
    ("errorDownloadFailed", "Download failed, please try again"),
    ("thumbnailMaxRes", "Max Resolution"),
    ("thumbnailSD", "Standard Definition"),
    ("thumbnailHigh", "High Quality"),
    ("thumbnailMedium", "Medium Quality"),
    ("thumbnailDefault", "Default"),
    ("imageNotAvailable", "Image not available"),
    ("imageAvailable", "Available"),
    ("downloadButton", "Download"),
    ("savedTo", "Saved to"),
    ("privacyPolicy", "Privacy Policy"),
    ("backToHome", "Back to Home"),
    ("writtenBy", "Written by"),
    ("onDate", "on"),
    ("currentLanguage", "Current language"),
    ("languageChanged", "Language changed to"),
];
