use rust_decimal_macros::dec;

use crate::models::Product;

/// The storefront's fixed catalog, in display order
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Smartphone Galaxy Pro".to_string(),
            price: dec!(899.99),
            original_price: Some(dec!(1199.99)),
            description: "Smartphone premium com câmera de 108MP, tela AMOLED de 6.7 polegadas, processador octa-core e 256GB de armazenamento. Ideal para fotografia profissional e gaming.".to_string(),
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500&h=500&fit=crop".to_string(),
            category: "Eletrônicos".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Notebook Gamer Ultra".to_string(),
            price: dec!(2499.99),
            original_price: None,
            description: "Notebook gamer com placa de vídeo RTX 4060, processador Intel i7, 16GB RAM e SSD 1TB. Perfeito para jogos e trabalho pesado.".to_string(),
            image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=500&h=500&fit=crop".to_string(),
            category: "Computadores".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Fone Bluetooth Premium".to_string(),
            price: dec!(299.99),
            original_price: Some(dec!(399.99)),
            description: "Fone de ouvido wireless com cancelamento de ruído ativo, bateria de 30 horas e qualidade de som Hi-Fi. Conforto garantido para uso prolongado.".to_string(),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop".to_string(),
            category: "Áudio".to_string(),
            in_stock: true,
        },
        Product {
            id: "4".to_string(),
            name: "Smart TV 55\" 4K".to_string(),
            price: dec!(1899.99),
            original_price: None,
            description: "Smart TV LED 55 polegadas com resolução 4K, HDR, sistema operacional Android TV e conectividade Wi-Fi. Entretenimento em alta definição.".to_string(),
            image: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=500&h=500&fit=crop".to_string(),
            category: "TV e Home Theater".to_string(),
            in_stock: false,
        },
        Product {
            id: "5".to_string(),
            name: "Tablet Pro 12\"".to_string(),
            price: dec!(1299.99),
            original_price: Some(dec!(1499.99)),
            description: "Tablet profissional com tela de 12 polegadas, processador M1, 512GB de armazenamento e suporte à caneta digital. Ideal para criatividade e produtividade.".to_string(),
            image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=500&h=500&fit=crop".to_string(),
            category: "Tablets".to_string(),
            in_stock: true,
        },
    ]
}
