//! Hero section and feature cards of the upload page

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Processamento de Arquivos Técnicos"</h1>
            <p class="subtitle">
                "Faça upload de seus arquivos ZIP ou RAR contendo PDFs e DXFs para processamento automático "
                "e extração de informações técnicas."
            </p>
        </div>
    }
}

#[component]
pub fn FeatureCards() -> impl IntoView {
    let cards = [
        ("⚡", "Processamento Rápido", "Extração automática de dados técnicos de PDFs e DXFs em segundos."),
        ("✅", "Validação Inteligente", "Verificação automática de dados e estrutura dos arquivos enviados."),
        ("🗄️", "Armazenamento Seguro", "Dados processados são salvos de forma estruturada no banco de dados."),
    ];

    view! {
        <div class="feature-grid">
            {cards
                .into_iter()
                .map(|(icon, title, text)| view! {
                    <div class="feature-card">
                        <div class="feature-icon">{icon}</div>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
