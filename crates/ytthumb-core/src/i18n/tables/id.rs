pub(crate) const ID: &[(&str, &str)] = &[
    ("title", "Pengunduh Thumbnail YouTube"),
    ("subtitle", "Dapatkan semua ukuran thumbnail video YouTube dari tautannya"),
    ("inputPlaceholder", "Tempel URL video YouTube"),
    ("getThumbnailButton", "Ambil Thumbnail"),
    ("errorInvalidUrl", "Masukkan URL YouTube yang valid"),
    ("errorDownloadFailed", "Unduhan gagal, silakan coba lagi"),
    ("thumbnailMaxRes", "Resolusi Maksimum"),
    ("thumbnailSD", "Definisi Standar"),
    ("thumbnailHigh", "Kualitas Tinggi"),
    ("thumbnailMedium", "Kualitas Sedang"),
    ("thumbnailDefault", "Bawaan"),
    ("imageNotAvailable", "Gambar tidak tersedia"),
    ("imageAvailable", "Tersedia"),
    ("downloadButton", "Unduh"),
    ("savedTo", "Disimpan ke"),
    ("privacyPolicy", "Kebijakan Privasi"),
    ("backToHome", "Kembali ke Beranda"),
    ("writtenBy", "Ditulis oleh"),
    ("onDate", "pada"),
    ("currentLanguage", "Bahasa saat ini"),
    ("languageChanged", "Bahasa diubah ke"),
];
