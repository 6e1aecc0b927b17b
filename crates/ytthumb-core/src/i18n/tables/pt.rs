pub(crate) const PT: &[(&str, &str)] = &[
    ("title", "Baixador de miniaturas do YouTube"),
    ("subtitle", "Obtenha todos os tamanhos de miniatura de um vídeo do YouTube pelo link"),
    ("inputPlaceholder", "Cole a URL de um vídeo do YouTube"),
    ("getThumbnailButton", "Obter miniaturas"),
    ("errorInvalidUrl", "Insira uma URL do YouTube válida"),
    ("errorDownloadFailed", "Falha no download, tente novamente"),
    ("thumbnailMaxRes", "Resolução máxima"),
    ("thumbnailSD", "Definição padrão"),
    ("thumbnailHigh", "Alta qualidade"),
    ("thumbnailMedium", "Qualidade média"),
    ("thumbnailDefault", "Padrão"),
    ("imageNotAvailable", "Imagem não disponível"),
    ("imageAvailable", "Disponível"),
    ("downloadButton", "Baixar"),
    ("savedTo", "Salvo em"),
    ("privacyPolicy", "Política de privacidade"),
    ("backToHome", "Voltar ao início"),
    ("writtenBy", "Escrito por"),
    ("onDate", "em"),
    ("currentLanguage", "Idioma atual"),
    ("languageChanged", "Idioma alterado para"),
];
