pub(crate) const ES: &[(&str, &str)] = &[
    ("title", "Descargador de miniaturas de YouTube"),
    ("subtitle", "Obtén todos los tamaños de miniatura de un video de YouTube desde su enlace"),
    ("inputPlaceholder", "Pega la URL de un video de YouTube"),
    ("getThumbnailButton", "Obtener miniaturas"),
    ("errorInvalidUrl", "Introduce una URL de YouTube válida"),
    ("errorDownloadFailed", "La descarga falló, inténtalo de nuevo"),
    ("thumbnailMaxRes", "Resolución máxima"),
    ("thumbnailSD", "Definición estándar"),
    ("thumbnailHigh", "Alta calidad"),
    ("thumbnailMedium", "Calidad media"),
    ("thumbnailDefault", "Predeterminada"),
    ("imageNotAvailable", "Imagen no disponible"),
    ("imageAvailable", "Disponible"),
    ("downloadButton", "Descargar"),
    ("savedTo", "Guardado en"),
    ("privacyPolicy", "Política de privacidad"),
    ("backToHome", "Volver al inicio"),
    ("writtenBy", "Escrito por"),
    ("onDate", "el"),
    ("currentLanguage", "Idioma actual"),
    ("languageChanged", "Idioma cambiado a"),
];
