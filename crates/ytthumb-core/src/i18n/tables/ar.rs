pub(crate) const AR: &[(&str, &str)] = &[
    ("title", "أداة تنزيل الصور المصغرة من YouTube"),
    ("subtitle", "احصل على جميع أحجام الصور المصغرة لفيديو YouTube من رابطه"),
    ("inputPlaceholder", "الصق رابط فيديو YouTube"),
    ("getThumbnailButton", "احصل على الصور المصغرة"),
    ("errorInvalidUrl", "يرجى إدخال رابط YouTube صالح"),
    ("errorDownloadFailed", "فشل التنزيل، يرجى المحاولة مرة أخرى"),
    ("thumbnailMaxRes", "أعلى دقة"),
    ("thumbnailSD", "دقة قياسية"),
    ("thumbnailHigh", "جودة عالية"),
    ("thumbnailMedium", "جودة متوسطة"),
    ("thumbnailDefault", "افتراضي"),
    ("imageNotAvailable", "الصورة غير متوفرة"),
    ("imageAvailable", "متوفرة"),
    ("downloadButton", "تنزيل"),
    ("savedTo", "تم الحفظ في"),
    ("privacyPolicy", "سياسة الخصوصية"),
    ("backToHome", "العودة إلى الصفحة الرئيسية"),
    ("writtenBy", "كتبها"),
    ("onDate", "في"),
    ("currentLanguage", "اللغة الحالية"),
    ("languageChanged", "تم تغيير اللغة إلى"),
];
